//! One-off guess scoring
//!
//! Scores a guess against an answer without playing a game.

use crate::core::{Feedback, FeedbackRule, Word};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not five letters.
pub fn check_guess(guess: &str, answer: &str, rule: FeedbackRule) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let feedback = Feedback::calculate(&guess, &answer, rule);

    Ok(CheckResult {
        guess,
        answer,
        feedback,
    })
}
