//! Word list loading utilities
//!
//! Reads newline-delimited word lists, keeping only playable entries.

use super::WORD_LENGTH;
use std::fs;
use std::io;
use std::path::Path;

/// Load playable words from a file
///
/// Lines are trimmed and uppercased; entries that are not exactly
/// [`WORD_LENGTH`] ASCII letters are skipped rather than reported.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::words::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Parse playable words out of newline-delimited text
///
/// # Examples
/// ```
/// use wordle_game::words::loader::words_from_str;
///
/// let words = words_from_str("crane\nslate\ntoo long\n");
/// assert_eq!(words, ["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if is_playable(trimmed) {
                Some(trimmed.to_uppercase())
            } else {
                None
            }
        })
        .collect()
}

fn is_playable(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}
