//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod guess;
mod letter;

pub use guess::Guess;
pub use letter::{LetterEval, LetterStatus};
