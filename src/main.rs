//! Absurdle - CLI
//!
//! Play against the adversary, inspect how a guess splits the dictionary, or
//! benchmark automatic players.

use absurdle::{
    adversary::CandidateSet,
    commands::{
        BenchmarkConfig, PlayOptions, PlayOutcome, analyze_guess, prompt_word_length,
        run_benchmark, run_play,
    },
    dictionary::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
    game::{DEFAULT_WORD_LENGTH, Game, GameConfig},
    output::{print_analysis_result, print_benchmark_result},
    solver::StrategyType,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use std::io::{self, IsTerminal};

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Adversarial Wordle: the answer keeps changing to dodge your guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a whitespace-separated word file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Word length (play asks when omitted, other commands use 5)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Keep dictionary words and guesses exactly as written
    #[arg(long, global = true)]
    case_sensitive: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Print the number of remaining candidates after each guess
        #[arg(long)]
        show_remaining: bool,
    },

    /// Show how a guess would split the candidates
    Analyze {
        /// Guess to analyze
        guess: String,

        /// Number of groups to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Play one game per opening word with an automatic player
    Benchmark {
        /// Strategy: minimax (default), alphabetical, random
        #[arg(short, long, default_value = "minimax")]
        strategy: String,

        /// Limit number of opening words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load dictionary tokens based on the -d flag
fn load_dictionary(source: &str) -> Result<Vec<String>> {
    match source {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("failed to read dictionary {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let tokens = load_dictionary(&cli.dictionary)?;
    info!("dictionary '{}' has {} tokens", cli.dictionary, tokens.len());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        show_remaining: false,
    });

    match command {
        Commands::Play { show_remaining } => {
            run_play_command(&tokens, cli.length, cli.case_sensitive, show_remaining)
        }
        Commands::Analyze { guess, top } => {
            let config = game_config(cli.length, cli.case_sensitive);
            run_analyze_command(&guess, top, &tokens, config)
        }
        Commands::Benchmark {
            strategy,
            limit,
            no_progress,
        } => {
            let config = game_config(cli.length, cli.case_sensitive);
            run_benchmark_command(&strategy, limit, !no_progress, &tokens, config)
        }
    }
}

fn game_config(length: Option<usize>, case_sensitive: bool) -> GameConfig {
    GameConfig::new(length.unwrap_or(DEFAULT_WORD_LENGTH)).with_normalize_case(!case_sensitive)
}

fn run_play_command(
    tokens: &[String],
    length: Option<usize>,
    case_sensitive: bool,
    show_remaining: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let length = match length {
        Some(length) => length,
        None => match prompt_word_length(&mut input, &mut output)? {
            Some(length) => length,
            None => return Ok(()),
        },
    };

    let config = GameConfig::new(length).with_normalize_case(!case_sensitive);
    let mut game = Game::new(tokens, config)?;

    let options = PlayOptions {
        show_remaining,
        colorize: output.is_terminal(),
    };
    let outcome = run_play(&mut game, &mut input, &mut output, options)?;
    info!("play ended: {outcome:?}");

    if outcome == PlayOutcome::NoCandidates {
        anyhow::bail!("no {length}-letter words in the dictionary");
    }
    Ok(())
}

fn build_candidates(tokens: &[String], config: GameConfig) -> Result<CandidateSet> {
    let normalized = tokens.iter().map(|t| config.normalize(t));
    Ok(CandidateSet::build(normalized, config.word_length)?)
}

fn run_analyze_command(
    guess: &str,
    top: usize,
    tokens: &[String],
    config: GameConfig,
) -> Result<()> {
    let candidates = build_candidates(tokens, config)?;
    let result = analyze_guess(&config.normalize(guess), &candidates, top)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    limit: Option<usize>,
    show_progress: bool,
    tokens: &[String],
    config: GameConfig,
) -> Result<()> {
    let candidates = build_candidates(tokens, config)?;
    let strategy = StrategyType::from_name(strategy_name);

    println!(
        "Running benchmark: {} strategy against {} words of length {}...",
        strategy.name(),
        candidates.len(),
        config.word_length
    );

    let bench_config = BenchmarkConfig {
        limit,
        show_progress,
    };
    let result = run_benchmark(&strategy, strategy.name(), &candidates, &bench_config);
    print_benchmark_result(&result);
    Ok(())
}
