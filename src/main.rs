//! Evil Hangman - CLI
//!
//! Play hangman against an adversary that never commits to a word, or simulate
//! many rounds to see how each difficulty fares.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{Player, SimulateConfig, analyze_lengths, run_play, run_simulation},
    core::{Difficulty, RoundConfig, WordPool},
    output::{print_length_report, print_simulation_result},
    wordlists::loader::{embedded_pool, load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an adversary that keeps the hardest family of words alive",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log every guess the adversary answers (same as `RUST_LOG=debug`)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round interactively (default)
    Play {
        /// Length of the secret word
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Wrong guesses allowed
        #[arg(short, long, default_value = "10")]
        guesses: usize,

        /// Difficulty: easy, medium, hard
        #[arg(short, long, default_value = "hard")]
        difficulty: String,

        /// Seed for the final word choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play many automated rounds in parallel and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Length of the secret word
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Wrong guesses allowed
        #[arg(short, long, default_value = "10")]
        guesses: usize,

        /// Difficulty: easy, medium, hard
        #[arg(short, long, default_value = "hard")]
        difficulty: String,

        /// Automated player: coverage (default), random
        #[arg(short, long, default_value = "coverage")]
        player: String,

        /// Base seed; round i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Show how many words of each length the word list has
    Lengths,
}

/// Load the word pool based on the -w flag
fn load_pool(wordlist: &str) -> Result<WordPool> {
    match wordlist {
        "embedded" => embedded_pool(),
        path => load_from_file(path),
    }
}

fn parse_difficulty(name: &str) -> Result<Difficulty> {
    name.parse::<Difficulty>().map_err(|e| anyhow!(e))
}

fn init_logging(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: 5,
        guesses: 10,
        difficulty: "hard".to_string(),
        seed: None,
    });

    let default_level = match command {
        Commands::Simulate { .. } => "info",
        _ => "warn",
    };
    init_logging(cli.verbose, default_level);

    let pool = load_pool(&cli.wordlist)?;

    match command {
        Commands::Play {
            length,
            guesses,
            difficulty,
            seed,
        } => run_play_command(&pool, length, guesses, &difficulty, seed),
        Commands::Simulate {
            rounds,
            length,
            guesses,
            difficulty,
            player,
            seed,
        } => run_simulate_command(&pool, rounds, length, guesses, &difficulty, &player, seed),
        Commands::Lengths => {
            print_length_report(&analyze_lengths(&pool));
            Ok(())
        }
    }
}

fn run_play_command(
    pool: &WordPool,
    length: usize,
    guesses: usize,
    difficulty: &str,
    seed: Option<u64>,
) -> Result<()> {
    let config = RoundConfig::new(length, guesses, parse_difficulty(difficulty)?);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let outcome = if let Some(seed) = seed {
        run_play(pool, config, &mut StdRng::seed_from_u64(seed), &mut input, &mut output)?
    } else {
        run_play(pool, config, &mut rand::rng(), &mut input, &mut output)?
    };

    log::debug!("round finished: {outcome:?}");
    Ok(())
}

fn run_simulate_command(
    pool: &WordPool,
    rounds: usize,
    length: usize,
    guesses: usize,
    difficulty: &str,
    player: &str,
    seed: u64,
) -> Result<()> {
    let round = RoundConfig::new(length, guesses, parse_difficulty(difficulty)?);
    let player = Player::from_name(player)
        .ok_or_else(|| anyhow!("Unknown player: {player} (expected coverage or random)"))?;

    let mut config = SimulateConfig::new(round, rounds, seed);
    config.player = player;
    config.show_progress = true;

    let result = run_simulation(pool, &config)?;
    print_simulation_result(&result);
    Ok(())
}
