//! Wordle Game
//!
//! A word-guessing game engine: positional letter scoring, a pluggable word
//! source, and a terminal play mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::session::GameSession;
//! use wordle_game::words::WordBank;
//!
//! // A single-word bank makes the secret deterministic
//! let bank = WordBank::new(vec!["APPLE".to_string()]).unwrap();
//! let mut session = GameSession::new(&bank);
//!
//! let guess = session.submit_guess("APPLE").unwrap();
//! assert!(guess.is_all_correct());
//! assert!(session.is_solved());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Word sources and dictionaries
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
