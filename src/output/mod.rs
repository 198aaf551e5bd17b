//! Terminal output formatting
//!
//! Display utilities for rendering scored guesses. Kept out of the core
//! types so the session stays free of presentation concerns.

pub mod formatters;

pub use formatters::{format_guess, status_glyph, status_row};
