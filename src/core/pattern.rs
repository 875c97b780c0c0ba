//! Revealed-pattern representation
//!
//! A pattern is the per-position view of a secret word: each slot holds the
//! letter when it has been guessed, or the `_` placeholder when it has not.
//! Patterns are derived on demand from the secret word and the guessed
//! letters; they are never stored by the game.

use super::{LetterSet, Word};
use std::fmt;

/// The token marking an unrevealed position
pub const PLACEHOLDER: u8 = b'_';

/// A revealed pattern: one slot per position of the secret word
///
/// Rendered with a single space between tokens, e.g. `a _ p p l e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    slots: Vec<u8>,
}

/// Error type for unparseable pattern text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidToken(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must contain at least one token"),
            Self::InvalidToken(ch) => {
                write!(f, "Invalid pattern token {ch:?}, expected a-z or '_'")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Derive the revealed pattern of `secret` under `guessed`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{LetterSet, Pattern, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guessed: LetterSet = b"ap".iter().copied().collect();
    ///
    /// let pattern = Pattern::reveal(&secret, guessed);
    /// assert_eq!(pattern.to_string(), "a p p _ _");
    /// ```
    #[must_use]
    pub fn reveal(secret: &Word, guessed: LetterSet) -> Self {
        let slots = secret
            .as_bytes()
            .iter()
            .map(|&letter| {
                if guessed.contains(letter) {
                    letter
                } else {
                    PLACEHOLDER
                }
            })
            .collect();

        Self { slots }
    }

    /// Parse a pattern from text such as `"a _ _ l e"` or `"a__le"`
    ///
    /// Whitespace separators are ignored; every remaining character must be
    /// a lowercase ASCII letter or the `_` placeholder.
    ///
    /// # Errors
    /// Returns `PatternError` if the text holds no tokens or contains a
    /// character that is neither a lowercase letter nor `_`.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut slots = Vec::new();

        for ch in text.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if ch == '_' || ch.is_ascii_lowercase() {
                slots.push(ch as u8);
            } else {
                return Err(PatternError::InvalidToken(ch));
            }
        }

        if slots.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { slots })
    }

    /// Number of positions (separators never count)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: both constructors guarantee at least one slot
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// One byte per position: a lowercase letter or the placeholder
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[u8] {
        &self.slots
    }

    /// True when no position is hidden
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.contains(&PLACEHOLDER)
    }

    /// Letters shown at revealed positions
    ///
    /// Placeholder slots contribute nothing.
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.slots.iter().copied().collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", char::from(slot))?;
        }
        Ok(())
    }
}
