//! Command implementations

pub mod lengths;
pub mod play;
pub mod simulate;

pub use lengths::{LengthReport, analyze_lengths};
pub use play::{PlayOutcome, run_play};
pub use simulate::{Player, SimulateConfig, SimulationResult, play_round, run_simulation};
