//! Hangman display pattern derivation and representation
//!
//! A pattern holds one symbol per letter position of the secret word:
//! - `-` = hidden (not yet revealed)
//! - any other character = a guessed letter revealed in that position
//!
//! Patterns order lexicographically by symbol, so `---` sorts before `-a-`.

use std::fmt;

/// Masked view of the secret word
///
/// The length is fixed for the whole round; a guess can only turn hidden
/// symbols into letters, never the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Vec<char>);

impl Pattern {
    /// Symbol used for positions that have not been revealed
    pub const HIDDEN: char = '-';

    /// Create an all-hidden pattern of the given length
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// assert_eq!(Pattern::hidden(4).to_string(), "----");
    /// ```
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self(vec![Self::HIDDEN; length])
    }

    /// Number of symbols (the round's word length)
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

    /// Symbols in position order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.0
    }

    /// Check whether every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&Self::HIDDEN)
    }

    /// Count the revealed positions
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|&&c| c != Self::HIDDEN).count()
    }

    /// Count how many positions show `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.0.iter().filter(|&&c| c == letter).count()
    }

    /// Check whether `letter` is revealed anywhere in the pattern
    #[must_use]
    pub fn reveals(&self, letter: char) -> bool {
        letter != Self::HIDDEN && self.0.contains(&letter)
    }

    /// Derive the pattern `word` would produce if `letter` were guessed now
    ///
    /// Each position showing `letter` in `word` is revealed; every other
    /// position carries over from `self` unchanged.
    ///
    /// `word` must have the same length as the pattern. Extra characters on
    /// either side are ignored.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let start = Pattern::hidden(5);
    /// let after_e = start.derive("geese", 'e');
    /// assert_eq!(after_e.to_string(), "-ee-e");
    ///
    /// let after_s = after_e.derive("geese", 's');
    /// assert_eq!(after_s.to_string(), "-eese");
    /// ```
    #[must_use]
    pub fn derive(&self, word: &str, letter: char) -> Self {
        Self(
            word.chars()
                .zip(&self.0)
                .map(|(ch, &current)| if ch == letter { letter } else { current })
                .collect(),
        )
    }

    /// Check whether `word` is consistent with this pattern
    ///
    /// Masking `word` by the revealed positions must reproduce the pattern
    /// exactly, and no letter revealed elsewhere in the pattern may occur in a
    /// hidden position of `word`.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        if word.chars().count() != self.len() {
            return false;
        }

        word.chars().zip(&self.0).all(|(ch, &symbol)| {
            if symbol == Self::HIDDEN {
                !self.reveals(ch)
            } else {
                ch == symbol
            }
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl From<&str> for Pattern {
    /// Parse a rendered pattern such as `"-a-"`
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}
