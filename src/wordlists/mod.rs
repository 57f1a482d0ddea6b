//! Word lists for hangman
//!
//! Provides the embedded dictionary compiled into the binary and a loader for
//! custom word files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
