//! Display functions for feedback events and command results

use crate::commands::MatchesResult;
use crate::game::{Feedback, WarningKind};
use colored::Colorize;

/// Print one feedback event
pub fn print_feedback(feedback: &Feedback) {
    match feedback {
        Feedback::Greeting {
            word_len,
            guesses_remaining,
            warnings_remaining,
            available,
        } => {
            println!("\n{}", "═".repeat(60).cyan());
            println!(" {} ", "WELCOME TO HANGMAN".bright_cyan().bold());
            println!("{}", "═".repeat(60).cyan());
            println!("\nI am thinking of a word that is {word_len} letters long.");
            println!("You have {warnings_remaining} warnings left.");
            println!("You have {guesses_remaining} guesses left.");
            println!("Available letters: {available}");
        }
        Feedback::Warning {
            kind,
            warnings_remaining,
            pattern,
        } => {
            let reason = match kind {
                WarningKind::InvalidLetter => "That is not a valid letter.",
                WarningKind::AlreadyGuessed => "You've already guessed that letter.",
            };
            println!(
                "{} {reason} You have {warnings_remaining} warnings left: {pattern}",
                "Oops!".yellow().bold()
            );
        }
        Feedback::Hit { pattern } => {
            println!("{} {pattern}", "Good guess:".green().bold());
        }
        Feedback::Miss { pattern } => {
            println!(
                "{} That letter is not in my word: {pattern}",
                "Oops!".red().bold()
            );
        }
        Feedback::Status {
            guesses_remaining,
            warnings_remaining,
        } => {
            println!("You have {guesses_remaining} guesses left");
            println!("You have {warnings_remaining} warnings left");
        }
        Feedback::HintMatches { words } => print_hint_matches(words),
        Feedback::Won { score } => {
            println!("\n{}", "Congratulations, you won!".bright_green().bold());
            println!(
                "Your total score for this game is: {}",
                score.to_string().bright_yellow().bold()
            );
        }
        Feedback::Lost { word } => {
            println!("\n{}", "Sorry, you ran out of guesses.".red().bold());
            println!("The word was: {}", word.bright_yellow().bold());
        }
    }
}

fn print_hint_matches(words: &[String]) {
    if words.is_empty() {
        println!("{}", "No words match the current pattern.".yellow());
        return;
    }

    println!("Possible word matches are:");
    println!("{}", words.join(" "));
}

/// Print the result of a pattern query
pub fn print_matches_result(result: &MatchesResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pattern: {}",
        result.pattern.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words match this pattern.".yellow());
        return;
    }

    println!("\n{} matching words:", result.words.len());
    println!("{}", result.words.join(" "));
}
