//! Interactive text mode
//!
//! Plays one round against the adversary on a line-based reader and writer.

use crate::core::{HangmanError, RoundConfig, WordPool};
use crate::engine::Round;
use crate::output::formatters::{guess_summary, round_status};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// How a played round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub won: bool,
    /// Revealed word on a win, the committed secret word otherwise
    pub secret_word: Option<String>,
    pub guesses: usize,
    pub wrong_guesses: usize,
}

/// Reasons a line of input is not a usable guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotSingleLetter,
    NotAlphabetic,
}

/// A parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Guess(char),
    Quit,
}

/// Parse one line of player input
///
/// Letters are lowercased. `quit` and `exit` end the game.
///
/// # Errors
///
/// Returns an `InputError` describing why the line is not a single letter.
pub fn parse_input(line: &str) -> Result<PlayerInput, InputError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "quit" | "exit" => return Ok(PlayerInput::Quit),
        _ => {}
    }

    let mut chars = trimmed.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(InputError::NotSingleLetter);
    };
    if !letter.is_alphabetic() {
        return Err(InputError::NotAlphabetic);
    }

    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(lower), None) => Ok(PlayerInput::Guess(lower)),
        _ => Ok(PlayerInput::Guess(letter)),
    }
}

/// Run one interactive round
///
/// Reads one guess per line from `input` until the round is won, lost, the
/// player quits or input ends. The secret word is committed with `rng`.
///
/// # Errors
///
/// Returns an error if the round cannot be prepared or on I/O failure.
pub fn run_play<R, W, G>(
    pool: &WordPool,
    config: RoundConfig,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<PlayOutcome>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut round = Round::new(pool, config).context("Cannot start round")?;

    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(output, "{}", "        E V I L   H A N G M A N".bright_red().bold())?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "\nI am thinking of a {}-letter word. Difficulty: {}.",
        config.word_length, config.difficulty
    )?;
    writeln!(output, "Type one letter per line, or 'quit' to give up.\n")?;

    if round.candidate_count() == 0 {
        writeln!(
            output,
            "{}",
            format!("No {}-letter words in the dictionary.", config.word_length).red()
        )?;
        return Ok(PlayOutcome {
            won: false,
            secret_word: None,
            guesses: 0,
            wrong_guesses: 0,
        });
    }

    let mut line = String::new();
    while !round.is_won() && !round.is_lost() {
        writeln!(output, "{}", round_status(&round))?;
        write!(output, "Your guess: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let letter = match parse_input(&line) {
            Ok(PlayerInput::Guess(letter)) => letter,
            Ok(PlayerInput::Quit) => break,
            Err(InputError::Empty) => continue,
            Err(InputError::NotSingleLetter | InputError::NotAlphabetic) => {
                writeln!(output, "{}", "Please enter a single letter.".yellow())?;
                continue;
            }
        };

        let remaining_before = round.remaining_guesses();
        match round.make_guess(letter) {
            Ok(_) => {
                let hit = round.remaining_guesses() == remaining_before;
                writeln!(output, "{}\n", guess_summary(letter, hit, round.pattern()))?;
            }
            Err(HangmanError::AlreadyGuessed(letter)) => {
                writeln!(
                    output,
                    "{}",
                    format!("You already guessed '{letter}'.").yellow()
                )?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let won = round.is_won();
    let secret_word = round.commit_secret_word(rng)?.to_string();

    if won {
        writeln!(
            output,
            "\n{} The word was {}.",
            "You win!".bright_green().bold(),
            secret_word.to_uppercase().bright_white().bold()
        )?;
    } else {
        writeln!(
            output,
            "\n{} The word was {}.",
            "You lose.".bright_red().bold(),
            secret_word.to_uppercase().bright_white().bold()
        )?;
    }

    Ok(PlayOutcome {
        won,
        secret_word: Some(secret_word),
        guesses: round.guess_count(),
        wrong_guesses: config.max_wrong_guesses - round.remaining_guesses(),
    })
}
