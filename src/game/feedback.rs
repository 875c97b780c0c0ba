//! Structured feedback events
//!
//! The session reports each round as a sequence of feedback events and
//! leaves presentation to the output module. Tests assert on the events
//! directly instead of captured text.

use crate::core::Pattern;

/// One unit of feedback from a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Game start: word length, starting counters, untried letters
    Greeting {
        word_len: usize,
        guesses_remaining: i32,
        warnings_remaining: u32,
        available: String,
    },
    /// Invalid or repeated input consumed a warning (or a guess)
    Warning {
        kind: WarningKind,
        warnings_remaining: u32,
        pattern: Pattern,
    },
    /// The guessed letter is in the word
    Hit { pattern: Pattern },
    /// The guessed letter is not in the word
    Miss { pattern: Pattern },
    /// Counter totals after a round
    Status {
        guesses_remaining: i32,
        warnings_remaining: u32,
    },
    /// Dictionary words consistent with the revealed pattern
    HintMatches { words: Vec<String> },
    /// Every letter of the word was revealed
    Won { score: i32 },
    /// Guesses ran out; the secret is disclosed
    Lost { word: String },
}

/// The two kinds of warned-about input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Not a single lowercase letter
    InvalidLetter,
    /// Letter already tried this session
    AlreadyGuessed,
}
