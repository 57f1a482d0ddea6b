//! Ranking word families from hardest to easiest
//!
//! A family is harder for the player when:
//! 1. it keeps more candidate words alive,
//! 2. on equal size, it reveals fewer copies of the guessed letter,
//! 3. on equal reveals, its pattern sorts first lexicographically.
//!
//! Patterns within one partition are distinct, so the order is total.

use super::partition::Partition;
use crate::core::Pattern;
use std::cmp::Ordering;

/// One family of a partition, with the data the ranking needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family<'w> {
    pub pattern: Pattern,
    pub words: Vec<&'w str>,
    /// Copies of the trial letter shown in `pattern`
    pub revealed: usize,
}

impl<'w> Family<'w> {
    #[must_use]
    pub fn new(pattern: Pattern, words: Vec<&'w str>, letter: char) -> Self {
        let revealed = pattern.occurrences(letter);
        Self {
            pattern,
            words,
            revealed,
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }
}

/// Compare two families, `Less` meaning `a` is harder than `b`
#[must_use]
pub fn compare_hardness(a: &Family<'_>, b: &Family<'_>) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| a.revealed.cmp(&b.revealed))
        .then_with(|| a.pattern.cmp(&b.pattern))
}

/// Consume a partition and list its families hardest first
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::engine::{partition, rank_families};
///
/// let families = partition(["dog", "cat", "car"], 'a', &Pattern::hidden(3));
/// let ranked = rank_families(families, 'a');
///
/// assert_eq!(ranked[0].pattern.to_string(), "-a-");
/// assert_eq!(ranked[1].pattern.to_string(), "---");
/// ```
#[must_use]
pub fn rank_families(families: Partition<'_>, letter: char) -> Vec<Family<'_>> {
    let mut ranked: Vec<Family<'_>> = families
        .into_iter()
        .map(|(pattern, words)| Family::new(pattern, words, letter))
        .collect();

    ranked.sort_by(compare_hardness);
    ranked
}
