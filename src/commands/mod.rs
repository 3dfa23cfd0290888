//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;

pub use analyze::{AnalysisResult, GroupSummary, analyze_guess};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, GameRecord, play_game, run_benchmark};
pub use play::{PlayOptions, PlayOutcome, prompt_word_length, run_play};
