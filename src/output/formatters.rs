//! Formatting utilities for terminal output

use crate::core::{Guess, LetterStatus};
use colored::Colorize;

/// Render a scored guess as colored letter cells
///
/// Correct letters sit on green, present letters on yellow, absent letters
/// on black.
#[must_use]
pub fn format_guess(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|eval| {
            let cell = format!(" {} ", eval.letter());
            match eval.status() {
                LetterStatus::Correct => cell.black().on_green().to_string(),
                LetterStatus::Present => cell.black().on_yellow().to_string(),
                LetterStatus::Absent => cell.white().on_black().to_string(),
            }
        })
        .collect()
}

/// Emoji square for a single letter status
#[must_use]
pub const fn status_glyph(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Absent => '⬜',
    }
}

/// Render a scored guess as a row of emoji squares
#[must_use]
pub fn status_row(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|eval| status_glyph(eval.status()))
        .collect()
}
