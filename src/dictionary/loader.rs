//! Word list loading utilities
//!
//! Reads custom dictionaries from disk.

use super::Dictionary;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank lines and entries that are not five letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_board::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Build a dictionary from word-list text
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok());

    Dictionary::from_words(words)
}
