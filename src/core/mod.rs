//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod pattern;
mod word;

pub use letters::LetterSet;
pub use pattern::{PLACEHOLDER, Pattern, PatternError};
pub use word::{Word, WordError};
