//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{LengthReport, SimulationResult};
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎯 {}", "Round:".bright_cyan().bold());
    println!("   Word length:      {}", result.config.word_length);
    println!("   Wrong guesses:    {}", result.config.max_wrong_guesses);
    println!("   Difficulty:       {}", result.config.difficulty);

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Player wins:      {}",
        format!("{} ({:.1}%)", result.wins, result.win_rate() * 100.0)
            .green()
            .bold()
    );
    println!(
        "   Adversary wins:   {}",
        format!("{}", result.losses).red().bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Wrong guesses used:".bright_cyan().bold());
    for (&wrong, &count) in &result.wrong_guess_distribution {
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {wrong:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.top_words.is_empty() {
        println!("\n🔤 {}", "Most common secret words:".bright_cyan().bold());
        for (word, count) in &result.top_words {
            println!("   {:<12} {count}", word.to_uppercase());
        }
    }
}

/// Print word counts per length
pub fn print_length_report(report: &LengthReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {} words", report.total_words);
    let max = report.lengths.iter().map(|&(_, n)| n).max().unwrap_or(0) as f64;
    for &(length, count) in &report.lengths {
        let bar = create_progress_bar(count as f64, max, 40);
        println!("   {length:2} letters: {} {count:6}", bar.green());
    }

    if let Some(length) = report.most_common() {
        println!(
            "\n   Most words at length {}",
            length.to_string().bright_yellow().bold()
        );
    }
}
