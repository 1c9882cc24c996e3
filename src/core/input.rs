//! In-progress guess input
//!
//! Typed text is filtered to letters before it becomes visible and is
//! normalized to uppercase. Input longer than a word is kept while typing;
//! only the first five letters take part in a submission.

use super::WORD_LENGTH;

/// Keep ASCII letters only, uppercased
///
/// # Examples
/// ```
/// use wordle_board::core::sanitize;
///
/// assert_eq!(sanitize("H33}T"), "HT");
/// assert_eq!(sanitize("tests"), "TESTS");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// The guess the player is currently typing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessInput {
    text: String,
}

impl GuessInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append typed text, dropping anything that is not a letter
    pub fn push_str(&mut self, raw: &str) {
        self.text.push_str(&sanitize(raw));
    }

    /// Append a single keystroke; returns false if it was filtered out
    pub fn push_char(&mut self, c: char) -> bool {
        if c.is_ascii_alphabetic() {
            self.text.push(c.to_ascii_uppercase());
            true
        } else {
            false
        }
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Everything typed so far (letters only, uppercase)
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The part of the input that is matched against the answer
    #[must_use]
    pub fn candidate(&self) -> &str {
        // Input is ASCII-only, so byte slicing is on char boundaries
        &self.text[..self.text.len().min(WORD_LENGTH)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_non_letters() {
        assert_eq!(sanitize("H33}T"), "HT");
        assert_eq!(sanitize("a b-c_d!e"), "ABCDE");
        assert_eq!(sanitize("123"), "");
        assert_eq!(sanitize("héllo"), "HLLO");
    }

    #[test]
    fn push_str_filters_and_uppercases() {
        let mut input = GuessInput::new();
        input.push_str("te5ts");
        assert_eq!(input.text(), "TETS");
        input.push_str("!s");
        assert_eq!(input.text(), "TETSS");
    }

    #[test]
    fn push_char_rejects_non_letters() {
        let mut input = GuessInput::new();
        assert!(input.push_char('a'));
        assert!(!input.push_char('3'));
        assert!(!input.push_char(' '));
        assert_eq!(input.text(), "A");
    }

    #[test]
    fn candidate_caps_at_word_length() {
        let mut input = GuessInput::new();
        input.push_str("TESTSXYZ");
        assert_eq!(input.text(), "TESTSXYZ");
        assert_eq!(input.candidate(), "TESTS");
    }

    #[test]
    fn candidate_of_short_input_is_whole_input() {
        let mut input = GuessInput::new();
        input.push_str("TES");
        assert_eq!(input.candidate(), "TES");
    }

    #[test]
    fn pop_and_clear() {
        let mut input = GuessInput::new();
        input.push_str("ab");
        assert_eq!(input.pop(), Some('B'));
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.pop(), None);
    }
}
