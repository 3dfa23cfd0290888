//! Display functions for command results

use super::formatters::{create_progress_bar, score_line};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::game::Game;
use colored::Colorize;
use std::io::{self, Write};

/// Write the end-of-game summary: score line, blank line, every pattern
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_game_summary<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "{}", score_line(game.turns().len()))?;
    writeln!(out)?;
    for pattern in game.patterns() {
        writeln!(out, "{pattern}")?;
    }
    Ok(())
}

/// Print the result of analysing a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} candidates: {} distinct patterns",
        result.total_candidates, result.group_count
    );
    println!(
        "   Adversary answers: {} keeping {}",
        result.chosen,
        format!("{} candidates", result.chosen_size)
            .bright_yellow()
            .bold()
    );

    println!("\n📈 {}", "Largest groups:".bright_cyan().bold());
    for group in &result.groups {
        let bar = create_progress_bar(
            group.size as f64,
            result.chosen_size as f64,
            20,
        );
        let marker = if group.pattern == result.chosen {
            "◀".bright_green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "   {} {} {:5} {} {}",
            group.pattern,
            bar.green(),
            group.size,
            marker,
            group.sample.join(", ").bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Fastest game:     {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Longest game:     {}",
        format!("{}", result.max_turns).yellow()
    );
    if result.unfinished > 0 {
        println!(
            "   Unfinished:       {}",
            format!("{}", result.unfinished).red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.longest.is_empty() {
        println!("\n🐢 {}", "Openers the adversary stalls longest:".bright_cyan().bold());
        for (word, turns) in &result.longest {
            println!("   {} {turns}", word.to_uppercase().bright_white().bold());
        }
    }
    if !result.shortest.is_empty() {
        println!("\n🐇 {}", "Openers that finish fastest:".bright_cyan().bold());
        for (word, turns) in &result.shortest {
            println!("   {} {turns}", word.to_uppercase().bright_white().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn summary_lists_every_pattern() {
        let mut game = Game::new(["arise", "berry", "ferry"], GameConfig::default()).unwrap();
        game.guess("ferry").unwrap();
        game.guess("arise").unwrap();

        let mut out = Vec::new();
        write_game_summary(&mut out, &game).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "Absurdle 2/∞\n\n⬜🟨🟨⬜⬜\n🟩🟩🟩🟩🟩\n");
    }
}
