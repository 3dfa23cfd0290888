//! Benchmark command
//!
//! Plays one simulated game per opening word and measures how long the
//! adversary can stall a given strategy.

use crate::adversary::{CandidateSet, evaluate};
use crate::core::Word;
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Number of openers listed as longest and shortest
const REPORTED_OPENERS: usize = 5;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    /// Only use the first N openers in alphabetical order
    pub limit: Option<usize>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub opener: String,
    pub turns: usize,
    pub finished: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: String,
    pub total_games: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub unfinished: usize,
    pub distribution: BTreeMap<usize, usize>,
    /// Openers with the most turns, longest first
    pub longest: Vec<(String, usize)>,
    /// Openers with the fewest turns, shortest first
    pub shortest: Vec<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game: `opener` first, then whatever `strategy` picks
///
/// Each game works on its own copy of the candidates. A game that cannot
/// continue (no guess available or an engine error) is reported unfinished.
pub fn play_game<S: Strategy>(
    strategy: &S,
    candidates: &CandidateSet,
    opener: &Word,
) -> GameRecord {
    let mut remaining = candidates.clone();
    let max_turns = candidates.len() + 1;
    let mut guess = opener.clone();
    let mut turns = 0;

    while turns < max_turns {
        turns += 1;

        match evaluate(&guess, &mut remaining) {
            Ok(pattern) if pattern.is_perfect() => {
                return GameRecord {
                    opener: opener.text().to_string(),
                    turns,
                    finished: true,
                };
            }
            Ok(_) => {}
            Err(err) => {
                warn!("game opened with {opener} stopped: {err}");
                break;
            }
        }

        match strategy.select_guess(&remaining) {
            Some(next) => guess = next.clone(),
            None => break,
        }
    }

    GameRecord {
        opener: opener.text().to_string(),
        turns,
        finished: false,
    }
}

/// Run one game per opener against the candidate set
///
/// Openers are the candidates in alphabetical order, limited by
/// `config.limit`. Games run in parallel.
pub fn run_benchmark<S: Strategy + Sync>(
    strategy: &S,
    strategy_name: &str,
    candidates: &CandidateSet,
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let start = Instant::now();

    let openers: Vec<&Word> = candidates
        .sorted()
        .into_iter()
        .take(config.limit.unwrap_or(usize::MAX))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(openers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(strategy_name.to_string());

    let records: Vec<GameRecord> = openers
        .par_iter()
        .map(|&opener| {
            let record = play_game(strategy, candidates, opener);
            debug!("{}: {} turns", record.opener, record.turns);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_and_clear();

    summarize(strategy_name, &records, start.elapsed())
}

fn summarize(strategy_name: &str, records: &[GameRecord], duration: Duration) -> BenchmarkResult {
    let total_games = records.len();
    let total_turns: usize = records.iter().map(|r| r.turns).sum();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for record in records {
        *distribution.entry(record.turns).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = records
        .iter()
        .map(|r| (r.opener.clone(), r.turns))
        .collect();
    ranked.sort_by(|(a_word, a_turns), (b_word, b_turns)| {
        b_turns.cmp(a_turns).then_with(|| a_word.cmp(b_word))
    });
    let longest: Vec<(String, usize)> = ranked.iter().take(REPORTED_OPENERS).cloned().collect();

    ranked.sort_by(|(a_word, a_turns), (b_word, b_turns)| {
        a_turns.cmp(b_turns).then_with(|| a_word.cmp(b_word))
    });
    let shortest: Vec<(String, usize)> = ranked.into_iter().take(REPORTED_OPENERS).collect();

    let (average_turns, games_per_second) = if total_games == 0 {
        (0.0, 0.0)
    } else {
        (
            total_turns as f64 / total_games as f64,
            total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    BenchmarkResult {
        strategy: strategy_name.to_string(),
        total_games,
        average_turns,
        min_turns: records.iter().map(|r| r.turns).min().unwrap_or(0),
        max_turns: records.iter().map(|r| r.turns).max().unwrap_or(0),
        unfinished: records.iter().filter(|r| !r.finished).count(),
        distribution,
        longest,
        shortest,
        duration,
        games_per_second,
    }
}
