//! In-memory word bank
//!
//! The production word source: a list of playable words with a hash-set
//! index for membership checks, picking secrets uniformly at random.

use super::{DICTIONARY, WordSource};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Word bank backed by an indexed word list
///
/// Words are stored uppercase; membership checks normalize their input, so
/// lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
    index: FxHashSet<String>,
}

/// Error type for word bank construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBankError {
    Empty,
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word bank must contain at least one word"),
        }
    }
}

impl std::error::Error for WordBankError {}

impl WordBank {
    /// Build a bank from a word list
    ///
    /// # Errors
    /// Returns `WordBankError::Empty` if `words` has no entries.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::words::WordBank;
    ///
    /// let bank = WordBank::new(vec!["crane".to_string(), "slate".to_string()]).unwrap();
    /// assert_eq!(bank.len(), 2);
    /// assert!(bank.contains("CRANE"));
    ///
    /// assert!(WordBank::new(Vec::new()).is_err());
    /// ```
    pub fn new(words: Vec<String>) -> Result<Self, WordBankError> {
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }

        let words: Vec<String> = words.into_iter().map(|word| word.to_uppercase()).collect();
        let index: FxHashSet<String> = words.iter().cloned().collect();

        Ok(Self { words, index })
    }

    /// Build a bank from the dictionary compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded dictionary is never empty.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DICTIONARY.iter().map(|&word| word.to_string()).collect())
            .expect("embedded dictionary is non-empty")
    }

    /// Number of words in the bank
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the bank holds no words
    ///
    /// Always false once constructed; `new` rejects empty lists.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the bank's words, uppercased, in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Check membership, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_uppercase())
    }
}

impl WordSource for WordBank {
    fn secret_word(&self) -> String {
        // Safe: construction rejects empty word lists
        self.words
            .choose(&mut rand::rng())
            .expect("word bank is never empty")
            .clone()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bank() -> WordBank {
        WordBank::new(vec![
            "apple".to_string(),
            "GRAPE".to_string(),
            "Lemon".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn new_rejects_empty_list() {
        assert!(matches!(
            WordBank::new(Vec::new()),
            Err(WordBankError::Empty)
        ));
    }

    #[test]
    fn words_are_stored_uppercase() {
        let bank = sample_bank();
        assert_eq!(bank.words(), ["APPLE", "GRAPE", "LEMON"]);
    }

    #[test]
    fn membership_ignores_case() {
        let bank = sample_bank();

        assert!(bank.contains("APPLE"));
        assert!(bank.contains("apple"));
        assert!(bank.contains("GrApE"));
        assert!(!bank.contains("MANGO"));
    }

    #[test]
    fn secret_word_is_always_a_member() {
        let bank = sample_bank();

        for _ in 0..20 {
            let secret = bank.secret_word();
            assert!(bank.contains(&secret));
        }
    }

    #[test]
    fn single_word_bank_is_deterministic() {
        let bank = WordBank::new(vec!["CRANE".to_string()]).unwrap();

        assert_eq!(bank.secret_word(), "CRANE");
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn valid_word_delegates_to_membership() {
        let bank = sample_bank();

        assert!(bank.is_valid_word("lemon"));
        assert!(!bank.is_valid_word("zzzzz"));
    }

    #[test]
    fn embedded_bank_loads() {
        let bank = WordBank::embedded();

        assert!(!bank.is_empty());
        assert!(bank.contains("APPLE"));
        assert!(bank.contains("CRANE"));
    }

    #[test]
    fn bank_error_display() {
        assert_eq!(
            WordBankError::Empty.to_string(),
            "Word bank must contain at least one word"
        );
    }
}
