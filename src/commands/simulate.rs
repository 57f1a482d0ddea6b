//! Simulation command
//!
//! Plays many automated rounds in parallel against one shared word pool.

use crate::core::{RoundConfig, WordPool};
use crate::engine::Round;
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Letters an automated player may guess
const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// How the automated player picks its next letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Player {
    /// Letter found in the most words still consistent with the board,
    /// ties broken at random
    #[default]
    Coverage,
    /// Letters in a random order
    Random,
}

impl Player {
    /// Create a player from its name
    ///
    /// Supported names: "coverage", "random"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "coverage" => Some(Self::Coverage),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Choose the next unguessed letter, or `None` when the alphabet is spent
    fn next_letter(self, round: &Round<'_>, order: &[char], rng: &mut StdRng) -> Option<char> {
        let mut open = order.iter().copied().filter(|&c| !round.already_guessed(c));

        match self {
            Self::Random => open.next(),
            Self::Coverage => {
                // Every candidate is derivable from the board and the dictionary
                let mut coverage: FxHashMap<char, usize> = FxHashMap::default();
                for word in round.candidates() {
                    let mut letters: Vec<char> = word.chars().collect();
                    letters.sort_unstable();
                    letters.dedup();
                    for letter in letters {
                        *coverage.entry(letter).or_insert(0) += 1;
                    }
                }

                let score = |c: &char| coverage.get(c).copied().unwrap_or(0);
                let open: Vec<char> = open.collect();
                let best = open.iter().map(score).max()?;
                let tied: Vec<char> = open.into_iter().filter(|c| score(c) == best).collect();
                tied.choose(rng).copied()
            }
        }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulateConfig {
    pub round: RoundConfig,
    pub rounds: usize,
    pub seed: u64,
    pub player: Player,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(round: RoundConfig, rounds: usize, seed: u64) -> Self {
        Self {
            round,
            rounds,
            seed,
            player: Player::Coverage,
            show_progress: false,
        }
    }
}

/// Result of a single automated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub won: bool,
    pub guesses: usize,
    pub wrong_guesses: usize,
    pub secret_word: String,
}

/// Aggregate statistics over all simulated rounds
#[derive(Debug)]
pub struct SimulationResult {
    pub config: RoundConfig,
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_guesses: f64,
    /// Wrong guesses used → number of rounds
    pub wrong_guess_distribution: BTreeMap<usize, usize>,
    /// Most frequently committed secret words, most common first
    pub top_words: Vec<(String, usize)>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.total_rounds as f64
    }
}

/// Play one automated round to completion
///
/// # Errors
///
/// Returns an error if the round cannot be prepared or has no candidates.
pub fn play_round(
    pool: &WordPool,
    config: RoundConfig,
    player: Player,
    seed: u64,
) -> Result<RoundResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut round = Round::new(pool, config)?;

    let mut order = ALPHABET;
    if player == Player::Random {
        order.shuffle(&mut rng);
    }

    while !round.is_won() && !round.is_lost() {
        let Some(letter) = player.next_letter(&round, &order, &mut rng) else {
            break;
        };
        round.make_guess(letter)?;
    }

    Ok(RoundResult {
        won: round.is_won(),
        guesses: round.guess_count(),
        wrong_guesses: config.max_wrong_guesses - round.remaining_guesses(),
        secret_word: round.commit_secret_word(&mut rng)?.to_string(),
    })
}

/// Run the simulation
///
/// Each round owns its own state and random source; all rounds share `pool`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the pool has no words
/// of the requested length.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_simulation(pool: &WordPool, config: &SimulateConfig) -> Result<SimulationResult> {
    config.round.validate()?;
    if pool.word_count(config.round.word_length) == 0 {
        bail!(
            "No {}-letter words in the word list",
            config.round.word_length
        );
    }

    log::info!(
        "simulating {} {} rounds of length {}",
        config.rounds,
        config.round.difficulty,
        config.round.word_length
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<RoundResult> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.wrapping_add(i as u64);
            let result = play_round(pool, config.round, config.player, seed);
            pb.inc(1);
            result
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("done");
    let duration = start.elapsed();

    Ok(summarize(config.round, &results, duration))
}

fn summarize(
    config: RoundConfig,
    results: &[RoundResult],
    duration: Duration,
) -> SimulationResult {
    let total_rounds = results.len();
    let wins = results.iter().filter(|r| r.won).count();
    let total_guesses: usize = results.iter().map(|r| r.guesses).sum();

    let mut wrong_guess_distribution = BTreeMap::new();
    let mut word_counts: FxHashMap<&str, usize> = FxHashMap::default();
    for result in results {
        *wrong_guess_distribution
            .entry(result.wrong_guesses)
            .or_insert(0) += 1;
        *word_counts.entry(result.secret_word.as_str()).or_insert(0) += 1;
    }

    let mut top_words: Vec<(String, usize)> = word_counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    top_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_words.truncate(5);

    SimulationResult {
        config,
        total_rounds,
        wins,
        losses: total_rounds - wins,
        average_guesses: if total_rounds == 0 {
            0.0
        } else {
            total_guesses as f64 / total_rounds as f64
        },
        wrong_guess_distribution,
        top_words,
        duration,
    }
}
