//! Command implementations

pub mod matches;
pub mod play;

pub use matches::{MatchesResult, find_matches};
pub use play::run_play;
