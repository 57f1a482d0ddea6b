//! Set of letters guessed during a round

use std::collections::BTreeSet;
use std::fmt;

/// Letters guessed so far, kept in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters(BTreeSet<char>);

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess
    ///
    /// Returns `false` if the letter was already present.
    pub fn insert(&mut self, letter: char) -> bool {
        self.0.insert(letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in ascending order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for GuessedLetters {
    /// Renders as `[a, c, e]`, or `[]` when nothing has been guessed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, letter) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}")?;
        }
        write!(f, "]")
    }
}
