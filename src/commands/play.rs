//! Interactive play mode
//!
//! Text-based game loop that reads guesses from any buffered input, so the
//! whole flow is scriptable in tests.

use crate::output::{format_guess, status_row};
use crate::session::{GameSession, GameStatus};
use crate::words::WordSource;
use log::debug;
use std::io::{self, BufRead, Write};

/// How a play session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Solved, with the number of attempts used
    Won(usize),
    /// Ran out of attempts
    Lost,
    /// Player quit or input ended before the game resolved
    Abandoned,
}

/// Run one interactive game against `source`
///
/// Reads one guess per line from `reader`. Input is trimmed and uppercased;
/// empty lines are ignored and `quit` or `exit` gives up. A rejected guess
/// prints the reason and does not consume an attempt.
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_play<S: WordSource, R: BufRead>(
    source: &S,
    max_attempts: usize,
    mut reader: R,
) -> io::Result<PlayOutcome> {
    let mut session = GameSession::with_attempts(source, max_attempts);
    debug!("session started with {} attempts", session.max_attempts());

    println!(
        "Guess the {}-letter word. You have {} attempts.",
        session.secret_word().chars().count(),
        session.max_attempts()
    );
    println!("Type 'quit' to give up.\n");

    while !session.should_end_game() {
        print!(
            "Attempt {} of {}: ",
            session.current_attempt() + 1,
            session.max_attempts()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim().to_uppercase();
        match input.as_str() {
            "" => continue,
            "QUIT" | "EXIT" => break,
            _ => {}
        }

        match session.submit_guess(&input) {
            Ok(guess) => println!("{}  {}", format_guess(guess), status_row(guess)),
            Err(err) => {
                debug!("rejected guess {input:?}");
                println!("{err}");
            }
        }
    }

    let outcome = match session.status() {
        GameStatus::Won => {
            let used = session.current_attempt();
            println!(
                "\nSolved in {used} {}!",
                if used == 1 { "guess" } else { "guesses" }
            );
            PlayOutcome::Won(used)
        }
        GameStatus::Lost => {
            println!("\nOut of attempts! The word was {}.", session.secret_word());
            PlayOutcome::Lost
        }
        GameStatus::InProgress => {
            println!("\nGame abandoned. The word was {}.", session.secret_word());
            PlayOutcome::Abandoned
        }
    };

    Ok(outcome)
}
