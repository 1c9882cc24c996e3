//! Game configuration
//!
//! Resolved from command-line flags by the binary; everything here is plain
//! data plus the steps that turn it into a dictionary and an answer.

use crate::core::FeedbackRule;
use crate::dictionary::{Dictionary, loader::load_from_file};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordlistSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl WordlistSource {
    /// `builtin` or a path to a word list
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "builtin" | "default" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Fixed answer; a random one is drawn when absent
    pub answer: Option<String>,
    pub wordlist: WordlistSource,
    pub rule: FeedbackRule,
}

impl GameConfig {
    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if a word list file cannot be read or contains no
    /// five-letter words.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        let dictionary = match &self.wordlist {
            WordlistSource::Builtin => Dictionary::embedded(),
            WordlistSource::File(path) => load_from_file(path)
                .with_context(|| format!("failed to load word list {}", path.display()))?,
        };

        if dictionary.is_empty() {
            bail!("word list contains no five-letter words");
        }

        tracing::debug!(words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    /// The configured answer, or a random one from `dictionary`
    ///
    /// # Errors
    ///
    /// Returns an error if no answer is configured and the dictionary is empty.
    pub fn pick_answer(&self, dictionary: &Dictionary) -> Result<String> {
        if let Some(answer) = &self.answer {
            return Ok(answer.clone());
        }

        dictionary
            .random_answer(&mut rand::rng())
            .map(|word| word.text().to_string())
            .context("no word available to use as the answer")
    }
}
