//! The game engine
//!
//! A deterministic state machine over (answer, guesses, current input).
//! Front-ends feed it keystrokes and Enter presses and draw what it reports.

mod answer;
mod board;
mod status;

pub use answer::{AnswerWarning, validate_answer};
pub use board::{GameBoard, GuessRecord, GuessSlot, RejectReason, SubmitOutcome};
pub use status::{DEFEAT_MESSAGE, GameStatus, VICTORY_MESSAGE};
