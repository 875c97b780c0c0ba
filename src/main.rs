//! Hangman - CLI
//!
//! Interactive console Hangman with an optional `*` hint wildcard and a
//! one-shot pattern query mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{find_matches, run_play},
    core::Word,
    game::SessionConfig,
    output::print_matches_result,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Interactive console Hangman with dictionary-backed pattern hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of whitespace-separated words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Enable the `*` hint wildcard
        #[arg(long)]
        hints: bool,
    },

    /// List dictionary words consistent with a revealed pattern
    Matches {
        /// Pattern with `_` placeholders, e.g. "b_n_n_" or "a _ _ l e"
        pattern: String,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load the word list based on the -w flag
    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode without hints if no command given
    let command = cli.command.unwrap_or(Commands::Play { hints: false });

    match command {
        Commands::Play { hints } => {
            run_play(&words, SessionConfig { hints }).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Matches { pattern } => {
            let result = find_matches(&pattern, &words)?;
            print_matches_result(&result);
            Ok(())
        }
    }
}
