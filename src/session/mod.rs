//! Game session management
//!
//! One [`GameSession`] per game: it tracks the secret word, the attempt
//! slots, and decides when the game is over.

mod game;

pub use game::{DEFAULT_MAX_ATTEMPTS, GameSession, GameStatus, GuessError};
