//! Gameplay: guess evaluation, hint matching, and the session state machine

pub mod evaluator;
pub mod feedback;
pub mod matcher;
pub mod session;

pub use evaluator::{Classification, available_letters, classify, is_fully_guessed};
pub use feedback::{Feedback, WarningKind};
pub use session::{
    HINT_WILDCARD, STARTING_GUESSES, STARTING_WARNINGS, Session, SessionConfig, SessionState,
};
