//! Simple line-mode game
//!
//! Text-based game without the TUI: every line read is typed into the board
//! and submitted.

use crate::core::MAX_GUESSES;
use crate::dictionary::WordValidator;
use crate::game::{GameBoard, GameStatus, SubmitOutcome};
use crate::output::write_board;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Play one game reading guesses from `input` and writing to `output`
///
/// Returns the final status; `InProgress` if the player quit or the input
/// ran out before the game ended.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<V, R, W>(board: &mut GameBoard<V>, mut input: R, mut output: W) -> Result<GameStatus>
where
    V: WordValidator,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════╗")?;
    writeln!(output, "║           W O R D L E                ║")?;
    writeln!(output, "╚══════════════════════════════════════╝")?;
    writeln!(
        output,
        "Guess the five-letter word in {MAX_GUESSES} tries. Type 'quit' to give up."
    )?;
    write_board(&mut output, board)?;

    while board.input_enabled() {
        write!(
            output,
            "Guess {}/{MAX_GUESSES}: ",
            board.guesses().len() + 1
        )?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read guess")?;
        if read == 0 {
            break;
        }

        let line = line.trim();
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(output, "\n👋 The word was {}", board.answer())?;
            break;
        }

        board.clear_input();
        board.type_text(line);
        match board.submit() {
            SubmitOutcome::Accepted { .. } => write_board(&mut output, board)?,
            SubmitOutcome::Rejected(reason) => writeln!(output, "❌ {reason}")?,
            SubmitOutcome::Ignored => break,
        }
    }

    Ok(board.status())
}
