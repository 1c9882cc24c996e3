//! Dictionary of valid words
//!
//! The game only asks one question of a dictionary: is this a real word?
//! That question is the `WordValidator` trait, so tests and front-ends can
//! plug in anything from the embedded list to a closure.

mod embedded;
pub mod loader;

use crate::core::Word;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

pub use embedded::{ANSWERS, ANSWERS_COUNT, WORDS, WORDS_COUNT};

/// Decides whether a word may be guessed
pub trait WordValidator {
    /// Case-insensitive membership check
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<F> WordValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// A set of valid five-letter words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// The built-in dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS.iter().filter_map(|&s| Word::new(s).ok()))
    }

    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Built-in answer words that are also in this dictionary
    #[must_use]
    pub fn answers(&self) -> Vec<Word> {
        ANSWERS
            .iter()
            .filter_map(|&s| Word::new(s).ok())
            .filter(|w| self.contains(w))
            .collect()
    }

    /// Pick a random answer from [`Self::answers`]
    ///
    /// Falls back to any word of this dictionary if none of the built-in
    /// answers are in it (e.g. a custom word list).
    #[must_use]
    pub fn random_answer<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        if let Some(word) = self.answers().choose(rng) {
            return Some(word.clone());
        }

        let mut all: Vec<&Word> = self.words.iter().collect();
        all.sort_by(|a, b| a.text().cmp(b.text()));
        all.choose(rng).map(|&w| w.clone())
    }
}

impl WordValidator for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.words.contains(&w))
    }
}
