//! Wordle Game - CLI
//!
//! Terminal word-guessing game with a pluggable word list.

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::io;
use wordle_game::{
    commands::run_play,
    session::DEFAULT_MAX_ATTEMPTS,
    words::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in the terminal",
    version,
    author
)]
struct Cli {
    /// Number of attempts allowed per game
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Path to a custom word list (default: embedded dictionary)
    #[arg(short = 'w', long)]
    wordlist: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bank = load_bank(cli.wordlist.as_deref())?;
    debug!("word bank ready with {} words", bank.len());

    let stdin = io::stdin();
    run_play(&bank, cli.attempts, stdin.lock())?;

    Ok(())
}

/// Build the word bank selected by the -w flag
fn load_bank(wordlist: Option<&str>) -> Result<WordBank> {
    match wordlist {
        None => Ok(WordBank::embedded()),
        Some(path) => {
            let words = load_from_file(path)?;
            Ok(WordBank::new(words)?)
        }
    }
}
