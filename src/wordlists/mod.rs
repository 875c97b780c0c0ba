//! Word lists for Hangman
//!
//! Provides the embedded default dictionary, loading of custom word lists,
//! and the random choice of a secret word.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::io;

/// Errors from the word repository
#[derive(Debug)]
pub enum RepositoryError {
    /// The backing word-list resource could not be read
    Unavailable(io::Error),
    /// The repository holds no words to choose from
    Empty,
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "Word list unavailable: {err}"),
            Self::Empty => write!(f, "Word list contains no words"),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable(err) => Some(err),
            Self::Empty => None,
        }
    }
}

/// Choose a secret word uniformly at random
///
/// # Errors
/// Returns `RepositoryError::Empty` if `words` is empty.
pub fn choose_random(words: &[Word]) -> Result<&Word, RepositoryError> {
    words.choose(&mut rand::rng()).ok_or(RepositoryError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // Every embedded word must construct cleanly
        assert_eq!(words_from_slice(WORDS).len(), WORDS.len());
    }

    #[test]
    fn choose_random_returns_member() {
        let words = words_from_slice(&["apple", "banana", "plum"]);
        let chosen = choose_random(&words).unwrap();
        assert!(words.contains(chosen));
    }

    #[test]
    fn choose_random_singleton() {
        let words = words_from_slice(&["apple"]);
        assert_eq!(choose_random(&words).unwrap().text(), "apple");
    }

    #[test]
    fn choose_random_empty_repository() {
        let words: Vec<Word> = Vec::new();
        assert!(matches!(
            choose_random(&words),
            Err(RepositoryError::Empty)
        ));
    }
}
