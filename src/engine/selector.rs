//! Difficulty-aware family selection
//!
//! The adversary keeps the hardest family, except that easier difficulties
//! periodically hand the player the second-hardest one.

use super::ranking::Family;
use crate::core::Difficulty;

/// Pick the rank of the family the adversary keeps
///
/// `guessed_count` is the number of distinct letters guessed so far, including
/// the current guess. Returns `None` only when there are no families.
///
/// # Examples
/// ```
/// use evil_hangman::core::Difficulty;
/// use evil_hangman::engine::select_rank;
///
/// assert_eq!(select_rank(Difficulty::Hard, 3, 2), Some(0));
/// assert_eq!(select_rank(Difficulty::Easy, 3, 2), Some(1));
/// assert_eq!(select_rank(Difficulty::Easy, 1, 2), Some(0));
/// ```
#[must_use]
pub fn select_rank(
    difficulty: Difficulty,
    family_count: usize,
    guessed_count: usize,
) -> Option<usize> {
    if family_count == 0 {
        return None;
    }

    let perturb = family_count > 1
        && difficulty
            .perturbation_period()
            .is_some_and(|period| guessed_count.is_multiple_of(period));

    Some(usize::from(perturb))
}

/// Choose the surviving family from a ranking, hardest first
///
/// Returns `None` if `ranked` is empty.
#[must_use]
pub fn select_family(
    mut ranked: Vec<Family<'_>>,
    difficulty: Difficulty,
    guessed_count: usize,
) -> Option<Family<'_>> {
    let rank = select_rank(difficulty, ranked.len(), guessed_count)?;
    Some(ranked.swap_remove(rank))
}
