//! Word sources and dictionaries
//!
//! The game asks a [`WordSource`] for its secret word and for guess
//! validation. [`WordBank`] is the standard implementation, built from the
//! embedded dictionary or a custom word list.

mod bank;
mod embedded;
pub mod loader;
mod source;

pub use bank::{WordBank, WordBankError};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use source::WordSource;

/// Length of every playable dictionary word
pub const WORD_LENGTH: usize = 5;
