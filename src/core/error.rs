//! Error type for pool construction and round operations

use std::fmt;

/// Errors raised by the hangman engine
///
/// Every error aborts only the offending call; state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanError {
    /// The word pool was empty
    InvalidConstruction,
    /// Word length or guess budget was zero
    InvalidRoundParameters {
        word_length: usize,
        max_wrong_guesses: usize,
    },
    /// The letter was already guessed this round
    AlreadyGuessed(char),
    /// No candidate words remain to guess against or commit to
    NoCandidatesRemaining,
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConstruction => write!(f, "Word pool must contain at least one word"),
            Self::InvalidRoundParameters {
                word_length,
                max_wrong_guesses,
            } => write!(
                f,
                "Word length and guess budget must be at least 1, got length {word_length} and {max_wrong_guesses} guesses"
            ),
            Self::AlreadyGuessed(letter) => write!(f, "Letter '{letter}' has already been guessed"),
            Self::NoCandidatesRemaining => write!(f, "No candidate words remain"),
        }
    }
}

impl std::error::Error for HangmanError {}
