//! Adversarial hangman engine
//!
//! Partitions candidates by pattern, ranks the families by hardness and lets
//! the round's difficulty decide which family survives each guess.

mod partition;
mod ranking;
mod round;
mod selector;

pub use partition::{Partition, family_sizes, partition};
pub use ranking::{Family, compare_hardness, rank_families};
pub use round::Round;
pub use selector::{select_family, select_rank};
