//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::Colorize;

/// Summary line shown when a game ends
#[must_use]
pub fn score_line(guesses: usize) -> String {
    format!("Absurdle {guesses}/∞")
}

/// Render a guess with each letter coloured by its feedback
#[must_use]
pub fn colorize_guess(guess: &Word, pattern: &Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.feedback())
        .map(|(letter, feedback)| {
            let cell = format!(" {} ", letter.to_uppercase());
            match feedback {
                Feedback::Correct => cell.black().on_green().bold().to_string(),
                Feedback::Present => cell.black().on_yellow().bold().to_string(),
                Feedback::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
