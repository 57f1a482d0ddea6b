//! Word length statistics
//!
//! Reports how many words of each length the pool offers.

use crate::core::WordPool;

/// Word counts per length
pub struct LengthReport {
    pub total_words: usize,
    /// (length, word count), shortest first
    pub lengths: Vec<(usize, usize)>,
}

impl LengthReport {
    /// The length with the most words, preferring the shorter on ties
    #[must_use]
    pub fn most_common(&self) -> Option<usize> {
        self.lengths
            .iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|&(length, _)| length)
    }
}

/// Count the words of every length in the pool
#[must_use]
pub fn analyze_lengths(pool: &WordPool) -> LengthReport {
    LengthReport {
        total_words: pool.len(),
        lengths: pool.lengths().into_iter().collect(),
    }
}
