//! Hangman
//!
//! Interactive console Hangman with a dictionary-backed hint mode: submit
//! `*` during play to list every word consistent with the revealed pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Word;
//! use hangman::game::{Session, SessionConfig, SessionState};
//!
//! let words = vec![Word::new("apple").unwrap()];
//! let mut session = Session::new(&words[0], &words, SessionConfig::default());
//!
//! session.handle_guess("a");
//! assert_eq!(session.revealed().to_string(), "a _ _ _ _");
//! assert_eq!(session.state(), SessionState::Active);
//! ```

// Core domain types
pub mod core;

// Gameplay
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
