//! Terminal output formatting
//!
//! Presentation of feedback events and command results; game logic never
//! prints directly.

pub mod display;

pub use display::{print_feedback, print_matches_result};
