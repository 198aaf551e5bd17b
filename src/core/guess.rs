//! Guess scoring against a secret word
//!
//! Scoring is positional and membership-based: a letter matching the secret
//! at the same index is Correct, a letter the secret contains anywhere else
//! is Present, and any other letter is Absent. Every occurrence of a
//! contained letter reports Present, however many times the secret uses it.

use super::{LetterEval, LetterStatus};
use std::fmt;

/// A fully scored guess
///
/// Holds one [`LetterEval`] per character of the candidate word, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    letters: Vec<LetterEval>,
}

impl Guess {
    /// Score `candidate` against `secret`, letter by letter
    ///
    /// Candidates longer than the secret are allowed here; positions past the
    /// secret's end fall through to the containment check. Callers that need
    /// equal lengths enforce that before scoring.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Guess, LetterStatus};
    ///
    /// let guess = Guess::classify("PLEAD", "APPLE");
    /// let statuses: Vec<LetterStatus> =
    ///     guess.letters().iter().map(|eval| eval.status()).collect();
    ///
    /// assert_eq!(
    ///     statuses,
    ///     [
    ///         LetterStatus::Present, // P is in APPLE, wrong spot
    ///         LetterStatus::Present, // L is in APPLE, wrong spot
    ///         LetterStatus::Present, // E is in APPLE, wrong spot
    ///         LetterStatus::Present, // A is in APPLE, wrong spot
    ///         LetterStatus::Absent,  // D is not in APPLE
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn classify(candidate: &str, secret: &str) -> Self {
        let secret_chars: Vec<char> = secret.chars().collect();

        let letters = candidate
            .chars()
            .enumerate()
            .map(|(i, letter)| {
                let status = if secret_chars.get(i) == Some(&letter) {
                    LetterStatus::Correct
                } else if secret_chars.contains(&letter) {
                    LetterStatus::Present
                } else {
                    LetterStatus::Absent
                };
                LetterEval::new(letter, status)
            })
            .collect();

        Self { letters }
    }

    /// Get the scored letters in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterEval] {
        &self.letters
    }

    /// Number of letters in the guess
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check whether the guess has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether every letter scored Correct
    #[inline]
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|eval| eval.status() == LetterStatus::Correct)
    }

    /// Reassemble the candidate word that was scored
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(LetterEval::letter).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for eval in &self.letters {
            write!(f, "{}", eval.letter())?;
        }
        Ok(())
    }
}
