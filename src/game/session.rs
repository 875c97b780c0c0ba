//! Game session state machine
//!
//! One `Session` owns the mutable state of a single game: the guessed and
//! used letters plus the two counters. States run `Active` → `Won` | `Lost`;
//! both end states are terminal.

use super::evaluator::{self, Classification};
use super::feedback::{Feedback, WarningKind};
use super::matcher;
use crate::core::{LetterSet, Pattern, Word};
use rustc_hash::FxHashSet;

/// Guesses at the start of a game
pub const STARTING_GUESSES: i32 = 6;

/// Warnings at the start of a game
pub const STARTING_WARNINGS: u32 = 3;

/// Token that triggers hint output when hints are enabled
pub const HINT_WILDCARD: &str = "*";

/// Missing a vowel costs two guesses instead of one
const VOWELS: &[u8] = b"aeiou";

/// Per-session configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Enable the `*` hint wildcard
    pub hints: bool,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won { score: i32 },
    Lost,
}

/// One game of Hangman
///
/// Borrows the secret word and the word list from the repository for the
/// session's lifetime and owns everything else. The word list is consulted
/// only for hint rounds.
pub struct Session<'a> {
    secret: &'a Word,
    words: &'a [Word],
    hints: bool,
    guessed: LetterSet,
    used: FxHashSet<String>,
    guesses_remaining: i32,
    warnings_remaining: u32,
    state: SessionState,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(secret: &'a Word, words: &'a [Word], config: SessionConfig) -> Self {
        Self {
            secret,
            words,
            hints: config.hints,
            guessed: LetterSet::new(),
            used: FxHashSet::default(),
            guesses_remaining: STARTING_GUESSES,
            warnings_remaining: STARTING_WARNINGS,
            state: SessionState::Active,
        }
    }

    /// The opening announcement for this game
    #[must_use]
    pub fn greeting(&self) -> Feedback {
        Feedback::Greeting {
            word_len: self.secret.len(),
            guesses_remaining: self.guesses_remaining,
            warnings_remaining: self.warnings_remaining,
            available: evaluator::available_letters(&self.used),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> i32 {
        self.guesses_remaining
    }

    #[must_use]
    pub const fn warnings_remaining(&self) -> u32 {
        self.warnings_remaining
    }

    /// Letters confirmed to occur in the secret word
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// The revealed pattern under the letters guessed so far
    #[must_use]
    pub fn revealed(&self) -> Pattern {
        Pattern::reveal(self.secret, self.guessed)
    }

    /// Play one round with the raw input token
    ///
    /// Returns the round's feedback events in order. Hint rounds are free:
    /// they touch no counter and leave the used-input set alone. Calling
    /// this on a finished session returns no events.
    pub fn handle_guess(&mut self, raw: &str) -> Vec<Feedback> {
        if !self.is_active() {
            return Vec::new();
        }

        let token = raw.trim().to_lowercase();

        if self.hints && token == HINT_WILDCARD {
            return vec![self.hint_matches()];
        }

        let mut events = Vec::with_capacity(3);

        match evaluator::classify(&token, self.secret, &self.used) {
            Classification::InvalidLetter => {
                self.apply_penalty();
                events.push(Feedback::Warning {
                    kind: WarningKind::InvalidLetter,
                    warnings_remaining: self.warnings_remaining,
                    pattern: self.revealed(),
                });
            }
            Classification::Repeat => {
                self.apply_penalty();
                events.push(Feedback::Warning {
                    kind: WarningKind::AlreadyGuessed,
                    warnings_remaining: self.warnings_remaining,
                    pattern: self.revealed(),
                });
            }
            Classification::Hit(letter) => {
                self.guessed.insert(letter);
                events.push(Feedback::Hit {
                    pattern: self.revealed(),
                });
            }
            Classification::Miss(letter) => {
                events.push(Feedback::Miss {
                    pattern: self.revealed(),
                });
                self.guesses_remaining -= if VOWELS.contains(&letter) { 2 } else { 1 };
            }
        }

        // Every non-hint token counts as used, valid or not
        self.used.insert(token);

        events.push(Feedback::Status {
            guesses_remaining: self.guesses_remaining,
            warnings_remaining: self.warnings_remaining,
        });

        if evaluator::is_fully_guessed(self.secret, self.guessed) {
            let score = self.guesses_remaining * i32::from(self.secret.distinct_letters());
            self.state = SessionState::Won { score };
            events.push(Feedback::Won { score });
        } else if self.guesses_remaining <= 0 {
            self.state = SessionState::Lost;
            events.push(Feedback::Lost {
                word: self.secret.text().to_string(),
            });
        }

        events
    }

    // Warnings absorb the penalty until they run out
    fn apply_penalty(&mut self) {
        if self.warnings_remaining > 0 {
            self.warnings_remaining -= 1;
        } else {
            self.guesses_remaining -= 1;
        }
    }

    fn hint_matches(&self) -> Feedback {
        let pattern = self.revealed();
        let words = matcher::possible_matches(&pattern, self.words)
            .map(|word| word.text().to_string())
            .collect();

        Feedback::HintMatches { words }
    }
}
