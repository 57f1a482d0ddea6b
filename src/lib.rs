//! Evil Hangman
//!
//! An adversarial hangman engine. Instead of choosing a secret word up front, a
//! round keeps every dictionary word consistent with the board and answers each
//! guess with whichever family of words is hardest for the player.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::{Difficulty, RoundConfig, WordPool};
//!
//! let pool = WordPool::new(["dog", "cat", "car"]).unwrap();
//! let mut round = pool.prepare_round(RoundConfig::new(3, 5, Difficulty::Hard)).unwrap();
//!
//! round.make_guess('a').unwrap();
//! assert_eq!(round.pattern().to_string(), "-a-");
//! assert_eq!(round.candidate_count(), 2);
//! ```

// Core domain types
pub mod core;

// Partition, ranking and round state
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
