//! Immutable pool of dictionary words
//!
//! The pool is built once and shared read-only by every round.

use super::HangmanError;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Candidate words for every round, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from a list of words
    ///
    /// Words are kept exactly as given. Empty entries are dropped and
    /// duplicates collapse to their first occurrence.
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidConstruction` if no words remain.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::WordPool;
    ///
    /// let pool = WordPool::new(["dog", "cat", "car", "horse"]).unwrap();
    /// assert_eq!(pool.word_count(3), 3);
    ///
    /// assert!(WordPool::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut pool = Vec::new();

        for word in words {
            let word = word.as_ref();
            if word.is_empty() || seen.contains(word) {
                continue;
            }
            seen.insert(word.to_string());
            pool.push(word.to_string());
        }

        if pool.is_empty() {
            return Err(HangmanError::InvalidConstruction);
        }

        log::debug!("word pool built with {} words", pool.len());
        Ok(Self { words: pool })
    }

    /// Total number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A constructed pool is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate all words in pool order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Iterate words with exactly `length` characters
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.iter().filter(move |w| w.chars().count() == length)
    }

    /// Count words with exactly `length` characters
    #[must_use]
    pub fn word_count(&self, length: usize) -> usize {
        self.words_of_length(length).count()
    }

    /// Word count for every length present in the pool, shortest first
    #[must_use]
    pub fn lengths(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in self.iter() {
            *histogram.entry(word.chars().count()).or_insert(0) += 1;
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(WordPool::new(empty), Err(HangmanError::InvalidConstruction));
    }

    #[test]
    fn empty_entries_are_dropped() {
        assert_eq!(WordPool::new(["", ""]), Err(HangmanError::InvalidConstruction));

        let pool = WordPool::new(["", "dog", "cat"]).unwrap();
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["dog", "cat"]);
    }

    #[test]
    fn words_are_kept_verbatim() {
        let pool = WordPool::new([" dog", "dog", "t-shirt"]).unwrap();
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![" dog", "dog", "t-shirt"]);
        assert_eq!(pool.word_count(4), 1);
        assert_eq!(pool.word_count(3), 1);
    }

    #[test]
    fn duplicates_collapse() {
        let pool = WordPool::new(["dog", "cat", "dog"]).unwrap();
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());
    }

    #[test]
    fn word_count_by_length() {
        let pool = WordPool::new(["a", "dog", "cat", "horse", "mouse", "ox"]).unwrap();
        assert_eq!(pool.word_count(1), 1);
        assert_eq!(pool.word_count(2), 1);
        assert_eq!(pool.word_count(3), 2);
        assert_eq!(pool.word_count(5), 2);
        assert_eq!(pool.word_count(4), 0);
        assert_eq!(pool.word_count(0), 0);
    }

    #[test]
    fn word_count_uses_characters() {
        let pool = WordPool::new(["café", "cafe"]).unwrap();
        assert_eq!(pool.word_count(4), 2);
    }

    #[test]
    fn lengths_histogram() {
        let pool = WordPool::new(["dog", "cat", "horse", "ox"]).unwrap();
        let lengths: Vec<(usize, usize)> = pool.lengths().into_iter().collect();
        assert_eq!(lengths, vec![(2, 1), (3, 2), (5, 1)]);
    }

    #[test]
    fn words_of_length_keeps_pool_order() {
        let pool = WordPool::new(["dog", "horse", "cat", "car"]).unwrap();
        let three: Vec<&str> = pool.words_of_length(3).collect();
        assert_eq!(three, vec!["dog", "cat", "car"]);
    }
}
