//! Round configuration

use super::{Difficulty, HangmanError};

/// Parameters fixed for the lifetime of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub word_length: usize,
    pub max_wrong_guesses: usize,
    pub difficulty: Difficulty,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_wrong_guesses: usize, difficulty: Difficulty) -> Self {
        Self {
            word_length,
            max_wrong_guesses,
            difficulty,
        }
    }

    /// Check that the round can be played
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidRoundParameters` if the word length or the
    /// guess budget is zero.
    pub const fn validate(&self) -> Result<(), HangmanError> {
        if self.word_length == 0 || self.max_wrong_guesses == 0 {
            return Err(HangmanError::InvalidRoundParameters {
                word_length: self.word_length,
                max_wrong_guesses: self.max_wrong_guesses,
            });
        }
        Ok(())
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(5, 10, Difficulty::Hard)
    }
}
