//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess is classified against the answer as
//! `Correct` (right letter, right place), `Almost` (letter elsewhere in the
//! answer) or `Incorrect` (letter absent).

use std::fmt;
use std::str::FromStr;

use super::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    Incorrect,
    Almost,
    Correct,
}

impl LetterFeedback {
    /// Emoji tile used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Almost => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// How repeated letters in a guess are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackRule {
    /// A letter is `Almost` whenever the answer contains it anywhere.
    /// Repeated guess letters may all be marked even if the answer has one.
    #[default]
    Positional,
    /// Each answer letter satisfies at most one guess letter, greens first.
    Budgeted,
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackParseError(String);

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid feedback string: {}", self.0)
    }
}

impl std::error::Error for FeedbackParseError {}

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Score `guess` against `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::{Feedback, FeedbackRule, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer, FeedbackRule::Positional);
    ///
    /// // C R A N E vs S L A T E
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word, rule: FeedbackRule) -> Self {
        match rule {
            FeedbackRule::Positional => Self::positional(guess, answer),
            FeedbackRule::Budgeted => Self::budgeted(guess, answer),
        }
    }

    /// Positional scoring against raw answer text
    ///
    /// Used when the configured answer is not a well-formed word. Positions
    /// past the end of a short answer can only be `Almost` or `Incorrect`.
    #[must_use]
    pub fn against_text(guess: &Word, answer: &str) -> Self {
        let answer = answer.as_bytes();
        let mut result = [LetterFeedback::Incorrect; WORD_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            *slot = if answer.get(i) == Some(&letter) {
                LetterFeedback::Correct
            } else if answer.contains(&letter) {
                LetterFeedback::Almost
            } else {
                LetterFeedback::Incorrect
            };
        }

        Self(result)
    }

    fn positional(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterFeedback::Incorrect; WORD_LENGTH];

        for (slot, (&g, &a)) in result
            .iter_mut()
            .zip(guess.letters().iter().zip(answer.letters()))
        {
            *slot = if g == a {
                LetterFeedback::Correct
            } else if answer.has_letter(g) {
                LetterFeedback::Almost
            } else {
                LetterFeedback::Incorrect
            };
        }

        Self(result)
    }

    fn budgeted(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterFeedback::Incorrect; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // First pass: greens consume their letter
        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == answer.letter_at(i) {
                *slot = LetterFeedback::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from whatever is left
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *slot = LetterFeedback::Almost;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-letter classifications in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Correct)
            .count()
    }

    #[must_use]
    pub fn count_almost(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Almost)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            let ch = match letter {
                LetterFeedback::Correct => 'G',
                LetterFeedback::Almost => 'Y',
                LetterFeedback::Incorrect => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse "GY-GY" or "🟩🟨⬜🟩🟨" (`g`/`y`/`_` also accepted)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FeedbackParseError(s.to_string()));
        }

        let mut result = [LetterFeedback::Incorrect; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterFeedback::Correct,
                'Y' | 'y' | '🟨' => LetterFeedback::Almost,
                '-' | '_' | '⬜' => LetterFeedback::Incorrect,
                _ => return Err(FeedbackParseError(s.to_string())),
            };
        }

        Ok(Self(result))
    }
}
