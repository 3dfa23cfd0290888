//! Interactive play mode
//!
//! Reads guesses line by line and answers each with the adversary's pattern.
//! Input and output are generic so the loop can be driven from tests.

use crate::core::AbsurdleError;
use crate::game::Game;
use crate::output::{formatters::colorize_guess, write_game_summary};
use log::debug;
use std::io::{self, BufRead, Write};

/// Display options for the play loop
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Print how many candidates remain after each turn
    pub show_remaining: bool,
    /// Echo each guess with coloured letters
    pub colorize: bool,
}

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The adversary ran out of room and answered all correct
    Finished { guesses: usize },
    /// The player typed `quit` or `exit`
    Quit,
    /// Input closed before the game finished
    EndOfInput,
    /// The dictionary had no words of the requested length
    NoCandidates,
}

/// Ask for the word length until a positive number is entered
///
/// Returns `Ok(None)` if input ends first.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn prompt_word_length<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<usize>> {
    loop {
        write!(output, "What length word would you like to guess? ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match line.parse::<usize>() {
            Ok(length) if length > 0 => return Ok(Some(length)),
            _ => writeln!(output, "Please enter a positive whole number.")?,
        }
    }
}

/// Run the guess loop until the game finishes, the player quits, or input ends
///
/// `quit` and `exit` only act as commands when their length differs from
/// the game's word length; otherwise they are played as guesses.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
/// Rejected guesses are reported to `output` and do not end the loop.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
    options: PlayOptions,
) -> io::Result<PlayOutcome> {
    let length = game.word_length();

    writeln!(output, "Welcome to Absurdle!")?;
    if game.candidates().is_empty() {
        writeln!(output, "There are no {length}-letter words in the dictionary.")?;
        return Ok(PlayOutcome::NoCandidates);
    }
    writeln!(
        output,
        "Guess a {length}-letter word. Every answer keeps as many words alive as possible."
    )?;
    writeln!(output)?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            debug!("input closed after {} turns", game.turns().len());
            return Ok(PlayOutcome::EndOfInput);
        };
        if line.is_empty() {
            continue;
        }
        if is_quit_command(&line, length) {
            return Ok(PlayOutcome::Quit);
        }

        match game.guess(&line) {
            Ok(turn) => {
                if options.colorize {
                    writeln!(output, "{}", colorize_guess(&turn.guess, &turn.pattern))?;
                }
                writeln!(output, ": {}", turn.pattern)?;
                if options.show_remaining {
                    writeln!(output, "  {} words remain", turn.candidates_after)?;
                }
            }
            Err(err @ AbsurdleError::LengthMismatch { .. }) => {
                writeln!(output, "{err}, try again")?;
                continue;
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                return Ok(PlayOutcome::NoCandidates);
            }
        }

        if game.is_finished() {
            writeln!(output)?;
            write_game_summary(output, game)?;
            return Ok(PlayOutcome::Finished {
                guesses: game.turns().len(),
            });
        }
    }
}

fn is_quit_command(line: &str, word_length: usize) -> bool {
    let lowered = line.to_lowercase();
    matches!(lowered.as_str(), "quit" | "exit") && lowered.chars().count() != word_length
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
