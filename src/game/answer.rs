//! Answer validation
//!
//! A bad answer never stops a game. Problems are reported as warnings and
//! logged; the game goes ahead with whatever it was given.

use crate::core::WORD_LENGTH;
use crate::dictionary::WordValidator;
use std::fmt;

/// Non-fatal problem with a configured answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerWarning {
    WrongLength(usize),
    NotUppercase,
    NotInDictionary,
}

impl fmt::Display for AnswerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "answer must have exactly {WORD_LENGTH} characters, got {len}"
            ),
            Self::NotUppercase => write!(f, "answer must be all uppercase"),
            Self::NotInDictionary => write!(f, "answer is not a word in the dictionary"),
        }
    }
}

/// Check an answer and log every problem found
///
/// # Examples
/// ```
/// use wordle_board::dictionary::Dictionary;
/// use wordle_board::game::{AnswerWarning, validate_answer};
///
/// let dictionary = Dictionary::embedded();
/// assert!(validate_answer("ABORT", &dictionary).is_empty());
/// assert_eq!(
///     validate_answer("QWERT", &dictionary),
///     vec![AnswerWarning::NotInDictionary]
/// );
/// ```
pub fn validate_answer<V: WordValidator + ?Sized>(raw: &str, validator: &V) -> Vec<AnswerWarning> {
    let mut warnings = Vec::new();

    let len = raw.chars().count();
    if len != WORD_LENGTH {
        warnings.push(AnswerWarning::WrongLength(len));
    }

    if raw != raw.to_uppercase() {
        warnings.push(AnswerWarning::NotUppercase);
    }

    if !validator.is_valid_word(raw) {
        warnings.push(AnswerWarning::NotInDictionary);
    }

    for warning in &warnings {
        tracing::warn!(answer = raw, "{warning}");
    }

    warnings
}
