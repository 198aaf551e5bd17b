//! Game session state machine
//!
//! A session owns its secret word, a fixed number of attempt slots, and the
//! rules for accepting guesses. The secret comes from an injected
//! [`WordSource`], so the rules stay testable against scripted sources.

use crate::core::Guess;
use crate::words::WordSource;
use std::fmt;

/// Attempts allowed when no explicit allowance is given
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Derived view of where a session stands
///
/// Computed on demand from the guesses so far; never stored and never used
/// by the session itself to gate submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Error type for rejected guess submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    AttemptsExhausted { max_attempts: usize },
    InvalidLength { expected: usize, actual: usize },
    NotAWord(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttemptsExhausted { max_attempts } => {
                write!(f, "All {max_attempts} attempts have been used")
            }
            Self::InvalidLength { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
            Self::NotAWord(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// A single game of guessing the secret word
///
/// Holds the secret, a pre-sized list of attempt slots, and the count of
/// attempts used. The secret and the allowance are fixed at construction;
/// the only mutation is recording a successful guess.
#[derive(Debug)]
pub struct GameSession<'a, S: WordSource> {
    source: &'a S,
    secret: String,
    max_attempts: usize,
    attempts: Vec<Option<Guess>>,
    current_attempt: usize,
}

impl<'a, S: WordSource> GameSession<'a, S> {
    /// Start a session with the default attempt allowance
    ///
    /// Asks `source` for the secret word exactly once.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::session::GameSession;
    /// use wordle_game::words::WordBank;
    ///
    /// let bank = WordBank::new(vec!["CRANE".to_string()]).unwrap();
    /// let session = GameSession::new(&bank);
    ///
    /// assert_eq!(session.max_attempts(), 6);
    /// assert_eq!(session.current_attempt(), 0);
    /// ```
    #[must_use]
    pub fn new(source: &'a S) -> Self {
        Self::with_attempts(source, DEFAULT_MAX_ATTEMPTS)
    }

    /// Start a session with an explicit attempt allowance
    #[must_use]
    pub fn with_attempts(source: &'a S, max_attempts: usize) -> Self {
        let secret = source.secret_word();

        Self {
            source,
            secret,
            max_attempts,
            attempts: vec![None; max_attempts],
            current_attempt: 0,
        }
    }

    /// Submit a guess, consuming one attempt on success
    ///
    /// The candidate is checked in order: attempt allowance, length against
    /// the secret (in characters), then dictionary membership via the word
    /// source. A rejected guess leaves the session untouched and does not
    /// consume an attempt. On success the scored guess is stored in the next
    /// free slot and a borrow of it is returned.
    ///
    /// # Errors
    /// Returns `GuessError` if:
    /// - Every attempt has already been used
    /// - The candidate's length differs from the secret's
    /// - The word source does not recognize the candidate
    ///
    /// # Examples
    /// ```
    /// use wordle_game::session::{GameSession, GuessError};
    /// use wordle_game::words::WordBank;
    ///
    /// let bank = WordBank::new(vec!["APPLE".to_string()]).unwrap();
    /// let mut session = GameSession::new(&bank);
    ///
    /// assert!(session.submit_guess("APPLE").is_ok());
    /// assert!(session.is_solved());
    ///
    /// let err = session.submit_guess("APL").unwrap_err();
    /// assert_eq!(err, GuessError::InvalidLength { expected: 5, actual: 3 });
    /// ```
    pub fn submit_guess(&mut self, candidate: &str) -> Result<&Guess, GuessError> {
        if self.current_attempt >= self.max_attempts {
            return Err(GuessError::AttemptsExhausted {
                max_attempts: self.max_attempts,
            });
        }

        let expected = self.secret.chars().count();
        let actual = candidate.chars().count();
        if actual != expected {
            return Err(GuessError::InvalidLength { expected, actual });
        }

        if !self.source.is_valid_word(candidate) {
            return Err(GuessError::NotAWord(candidate.to_string()));
        }

        let guess = self.build_guess(candidate);
        let slot = self.current_attempt;
        self.current_attempt += 1;

        Ok(self.attempts[slot].insert(guess))
    }

    /// Score a candidate against the secret without committing it
    #[must_use]
    pub fn build_guess(&self, candidate: &str) -> Guess {
        Guess::classify(candidate, &self.secret)
    }

    /// Check whether the most recent guess matched the secret exactly
    ///
    /// False when no guess has been submitted yet. Only the latest guess
    /// counts; an earlier winning guess followed by a different one reads
    /// as unsolved again.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_guess().is_some_and(Guess::is_all_correct)
    }

    /// Check whether the game is over for the player
    ///
    /// True once the session is solved or every attempt has been used.
    /// The session itself keeps accepting guesses while attempts remain,
    /// solved or not; stopping is the caller's decision.
    #[must_use]
    pub fn should_end_game(&self) -> bool {
        self.is_solved() || self.current_attempt >= self.max_attempts
    }

    /// Summarize the session as won, lost, or still in progress
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Won
        } else if self.current_attempt >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Get the most recently submitted guess
    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        let last = self.current_attempt.checked_sub(1)?;
        self.attempts.get(last)?.as_ref()
    }

    /// Get the secret word
    #[inline]
    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret
    }

    /// Get the attempt allowance
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of attempts used so far
    #[inline]
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    /// Number of attempts still available
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.current_attempt)
    }

    /// Get every attempt slot, filled or not, in submission order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Option<Guess>] {
        &self.attempts
    }
}
