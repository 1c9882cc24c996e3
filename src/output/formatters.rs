//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, WORD_LENGTH};
use crate::game::GuessRecord;
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback.to_emoji()
}

/// A single board tile, coloured by its feedback
#[must_use]
pub fn colored_tile(letter: char, feedback: Option<LetterFeedback>) -> ColoredString {
    let tile = format!(" {letter} ");
    match feedback {
        Some(LetterFeedback::Correct) => tile.black().on_green().bold(),
        Some(LetterFeedback::Almost) => tile.black().on_yellow().bold(),
        Some(LetterFeedback::Incorrect) => tile.white().on_bright_black(),
        None => tile.bright_white(),
    }
}

/// A submitted guess as a row of coloured tiles
#[must_use]
pub fn colored_row(record: &GuessRecord) -> String {
    record
        .word
        .text()
        .chars()
        .zip(record.feedback.letters())
        .map(|(letter, &feedback)| colored_tile(letter, Some(feedback)).to_string())
        .collect()
}

/// The live input row, padded with blanks and without feedback
#[must_use]
pub fn input_row(text: &str) -> String {
    let mut letters: Vec<char> = text.chars().take(WORD_LENGTH).collect();
    letters.resize(WORD_LENGTH, '_');
    letters
        .into_iter()
        .map(|letter| colored_tile(letter, None).to_string())
        .collect()
}
