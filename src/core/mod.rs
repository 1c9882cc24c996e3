//! Core domain types for Wordle
//!
//! Words, per-letter feedback and input sanitization. Everything here is
//! pure and independent of any front-end.

mod feedback;
mod input;
mod word;

pub use feedback::{Feedback, FeedbackParseError, FeedbackRule, LetterFeedback};
pub use input::{GuessInput, sanitize};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses before the game is lost
pub const MAX_GUESSES: usize = 6;
