//! Round difficulty levels
//!
//! Difficulty controls how often the adversary gives up its hardest choice.

use std::fmt;
use std::str::FromStr;

/// How aggressively the adversary plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Yields the second-hardest family on every second guess
    Easy,
    /// Yields the second-hardest family on every fourth guess
    Medium,
    /// Always keeps the hardest family
    #[default]
    Hard,
}

impl Difficulty {
    /// All levels, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Create a difficulty from its name (case-insensitive)
    ///
    /// Supported names: "easy", "medium", "hard"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Guess cadence at which the second-hardest family is chosen
    ///
    /// The cadence counts every distinct letter guessed so far, right or wrong.
    /// `None` means the hardest family is always chosen.
    #[must_use]
    pub const fn perturbation_period(self) -> Option<usize> {
        match self {
            Self::Easy => Some(2),
            Self::Medium => Some(4),
            Self::Hard => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("Unknown difficulty: {s} (expected easy, medium or hard)"))
    }
}
