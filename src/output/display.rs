//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::simulate::fault_buckets;
use crate::commands::{SimulationConfig, SimulationResult};
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(config: &SimulationConfig, result: &SimulationResult) {
    let total = result.rounds.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {total}");
    println!("   Guesser:          {}", config.guesser.name());
    println!("   Seed:             {}", config.seed);
    println!(
        "   Win rate:         [{}] {}",
        create_progress_bar(result.win_rate, 100.0, 20).green(),
        format!("{:.1}%", result.win_rate).bright_yellow().bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!("   Average score:    {:.0}", result.average_score);
    println!(
        "   Best score:       {}",
        result.best_score.to_string().green()
    );
    println!("   Average turns:    {:.1}", result.average_turns);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Faults per round:".bright_cyan().bold());
    for faults in fault_buckets() {
        let count = result.fault_distribution.get(&faults).copied().unwrap_or(0);
        let pct = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {faults}: {bar} {count:4} ({pct:5.1}%)");
    }
}
