//! Display functions for the board and command results

use super::formatters::{colored_row, feedback_to_emoji, input_row};
use crate::core::{Feedback, Word};
use crate::game::{GameBoard, GameStatus, GuessSlot};
use colored::Colorize;
use std::io::{self, Write};

/// Write the six board rows and any end-of-game message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write, V>(out: &mut W, board: &GameBoard<V>) -> io::Result<()> {
    writeln!(out)?;
    for slot in board.slots() {
        let row = match slot {
            GuessSlot::Submitted(record) => colored_row(record),
            GuessSlot::InProgress(text) => input_row(text),
            GuessSlot::Empty => input_row(""),
        };
        writeln!(out, "  {row}")?;
    }
    writeln!(out)?;

    if let Some(message) = board.message() {
        let styled = match board.status() {
            GameStatus::Won => message.bright_green().bold(),
            _ => message.bright_red().bold(),
        };
        writeln!(out, "{styled}")?;
        if board.status() == GameStatus::Lost {
            writeln!(out, "The word was {}", board.answer().bright_yellow().bold())?;
        }
    }

    Ok(())
}

/// Print the result of scoring a single guess
pub fn print_check_result(guess: &Word, answer: &Word, feedback: Feedback) {
    // Nothing sensible to do if stdout is gone
    let _ = write_check_result(&mut io::stdout().lock(), guess, answer, feedback);
}

/// Write the result of scoring a single guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_check_result<W: Write>(
    out: &mut W,
    guess: &Word,
    answer: &Word,
    feedback: Feedback,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "{} vs {}",
        guess.text().bright_white().bold(),
        answer.text().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, "  {}  {feedback}", feedback_to_emoji(feedback))?;

    if feedback.is_solved() {
        writeln!(out, "  {}", "Exact match!".bright_green().bold())
    } else {
        writeln!(
            out,
            "  {} correct, {} almost",
            feedback.count_correct().to_string().green(),
            feedback.count_almost().to_string().yellow()
        )
    }
}
