//! Formatting utilities for terminal output

use crate::core::Pattern;
use crate::engine::Round;
use colored::Colorize;

/// Spread a pattern out for display, e.g. `- a -`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    let symbols: Vec<String> = pattern.symbols().iter().map(char::to_string).collect();
    symbols.join(" ")
}

/// Status block shown before each guess
#[must_use]
pub fn round_status(round: &Round<'_>) -> String {
    format!(
        "  Word:      {}\n  Guessed:   {}\n  Remaining: {}",
        spaced_pattern(round.pattern()).bright_white().bold(),
        round.guessed_letters_display(),
        remaining_label(round.remaining_guesses()),
    )
}

/// Remaining-guess counter, colored by urgency
#[must_use]
pub fn remaining_label(remaining: usize) -> String {
    let label = format!("{remaining} wrong {}", if remaining == 1 { "guess" } else { "guesses" });
    match remaining {
        0 | 1 => label.red().bold().to_string(),
        2 | 3 => label.yellow().to_string(),
        _ => label.green().to_string(),
    }
}

/// One-line reaction to a guess
#[must_use]
pub fn guess_summary(letter: char, hit: bool, pattern: &Pattern) -> String {
    if hit {
        let count = pattern.occurrences(letter);
        if count == 1 {
            format!("{} There is one '{letter}'.", "✓".green().bold())
        } else {
            format!("{} There are {count} '{letter}'s.", "✓".green().bold())
        }
    } else {
        format!("{} There is no '{letter}'.", "✗".red().bold())
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
