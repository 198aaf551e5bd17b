//! Word sourcing abstraction
//!
//! A session never owns a dictionary; it asks its source for the secret word
//! and for candidate validation. Anything implementing the trait can drive a
//! game, which keeps the rules testable against scripted sources.

/// Supplies secret words and validates guess candidates
pub trait WordSource {
    /// Pick the secret word for a new session
    ///
    /// Called exactly once per session, at construction.
    fn secret_word(&self) -> String;

    /// Check whether `candidate` is a playable dictionary word
    ///
    /// Called at most once per submission, after the length check has passed.
    fn is_valid_word(&self, candidate: &str) -> bool;
}
