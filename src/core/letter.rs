//! Letter evaluation types
//!
//! Every letter of a scored guess carries a status describing how it relates
//! to the secret word.

use std::fmt;

/// Outcome of scoring one guessed letter against the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter matches the secret at this position
    Correct,
    /// Letter appears somewhere in the secret, but not at this position
    Present,
    /// Letter does not appear in the secret at all
    Absent,
}

/// A single guessed letter together with its scored status
///
/// Immutable once built; the status is decided by [`crate::core::Guess`]
/// when a whole candidate word is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterEval {
    letter: char,
    status: LetterStatus,
}

impl LetterEval {
    /// Pair a letter with its already-determined status
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterEval, LetterStatus};
    ///
    /// let eval = LetterEval::new('A', LetterStatus::Correct);
    /// assert_eq!(eval.letter(), 'A');
    /// assert_eq!(eval.status(), LetterStatus::Correct);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus) -> Self {
        Self { letter, status }
    }

    /// Get the guessed letter
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Get the scored status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> LetterStatus {
        self.status
    }
}

impl fmt::Display for LetterEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_stores_letter_and_status() {
        let eval = LetterEval::new('A', LetterStatus::Present);
        assert_eq!(eval.letter(), 'A');
        assert_eq!(eval.status(), LetterStatus::Present);
    }

    #[test]
    fn eval_supports_every_status() {
        for status in [
            LetterStatus::Correct,
            LetterStatus::Present,
            LetterStatus::Absent,
        ] {
            let eval = LetterEval::new('X', status);
            assert_eq!(eval.status(), status);
        }
    }

    #[test]
    fn eval_display() {
        let eval = LetterEval::new('Q', LetterStatus::Absent);
        assert_eq!(format!("{eval}"), "Q");
    }

    #[test]
    fn eval_equality() {
        let correct_a = LetterEval::new('A', LetterStatus::Correct);

        assert_eq!(correct_a, LetterEval::new('A', LetterStatus::Correct));
        assert_ne!(correct_a, LetterEval::new('A', LetterStatus::Absent));
        assert_ne!(correct_a, LetterEval::new('B', LetterStatus::Correct));
    }
}
