//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::RepositoryError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// The file holds whitespace-separated lowercase tokens (the classic
/// one-line `words.txt` format, though any whitespace layout works).
/// Tokens that are not valid words are skipped.
///
/// # Errors
///
/// Returns `RepositoryError::Unavailable` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, RepositoryError> {
    let content = fs::read_to_string(path).map_err(RepositoryError::Unavailable)?;

    Ok(words_from_str(&content))
}

/// Parse whitespace-separated tokens into words, skipping invalid entries
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect()
}

/// Convert embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
