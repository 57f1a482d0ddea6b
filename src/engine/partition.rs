//! Partitioning candidates by the pattern a guess would reveal
//!
//! Given a trial letter, every candidate word falls into exactly one family:
//! the family of words that would produce the same pattern.

use crate::core::Pattern;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Families of candidate words keyed by the pattern they would produce
pub type Partition<'w> = FxHashMap<Pattern, Vec<&'w str>>;

/// Group candidates by the pattern each would produce if `letter` were guessed
///
/// Words within a family keep their relative order from `candidates`.
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::engine::partition;
///
/// let families = partition(["dog", "cat", "car"], 'a', &Pattern::hidden(3));
///
/// assert_eq!(families.len(), 2);
/// assert_eq!(families[&Pattern::from("-a-")], vec!["cat", "car"]);
/// assert_eq!(families[&Pattern::from("---")], vec!["dog"]);
/// ```
#[must_use]
pub fn partition<'w, I>(candidates: I, letter: char, current: &Pattern) -> Partition<'w>
where
    I: IntoIterator<Item = &'w str>,
{
    let mut families: Partition<'w> = FxHashMap::default();

    for word in candidates {
        families
            .entry(current.derive(word, letter))
            .or_default()
            .push(word);
    }

    families
}

/// Summarize a partition as pattern → family size, ordered by pattern
#[must_use]
pub fn family_sizes(families: &Partition<'_>) -> BTreeMap<Pattern, usize> {
    families
        .iter()
        .map(|(pattern, words)| (pattern.clone(), words.len()))
        .collect()
}
