//! Interactive play mode
//!
//! Line-based game loop: one prompt, one guess, one batch of feedback per
//! round.

use crate::core::Word;
use crate::game::{Session, SessionConfig};
use crate::output::print_feedback;
use crate::wordlists::choose_random;
use std::io::{self, Write};

/// Run one interactive game over stdin/stdout
///
/// # Errors
///
/// Returns an error if no secret word can be chosen or stdin closes before
/// the game ends.
pub fn run_play(words: &[Word], config: SessionConfig) -> Result<(), String> {
    let secret = choose_random(words).map_err(|e| e.to_string())?;
    let mut session = Session::new(secret, words, config);

    print_feedback(&session.greeting());

    while session.is_active() {
        let raw = get_user_input("Please guess a letter")?;

        for event in session.handle_guess(&raw) {
            print_feedback(&event);
        }

        if session.is_active() {
            println!("-------------");
        }
    }

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes_read == 0 {
        return Err("input closed before the game ended".to_string());
    }

    Ok(input.trim().to_string())
}
