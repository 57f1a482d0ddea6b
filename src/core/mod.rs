//! Core domain types for hangman
//!
//! This module contains the fundamental domain types. Nothing here performs I/O;
//! all types are pure and testable.

mod config;
mod difficulty;
mod error;
mod letters;
mod pattern;
mod pool;

pub use config::RoundConfig;
pub use difficulty::Difficulty;
pub use error::HangmanError;
pub use letters::GuessedLetters;
pub use pattern::Pattern;
pub use pool::WordPool;
