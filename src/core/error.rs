//! Error type for caller-input violations
//!
//! Every failure in the game core is a caller bug or bad input, never a
//! transient condition, so nothing here is retried internally.

use std::fmt;

/// Error returned by the candidate filter and the feedback engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsurdleError {
    /// Requested word length is less than 1
    InvalidWordLength { length: usize },
    /// A guess was evaluated against an empty candidate set
    EmptyCandidateSet,
    /// The guess does not have the configured word length
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for AbsurdleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordLength { length } => {
                write!(f, "word length must be at least 1, got {length}")
            }
            Self::EmptyCandidateSet => write!(f, "no candidates remain"),
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "guess length mismatch: expected {expected} letters, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for AbsurdleError {}
