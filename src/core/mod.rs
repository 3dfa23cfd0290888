//! Core domain types for Absurdle
//!
//! This module contains the fundamental domain types: words, feedback patterns
//! and the error type shared by the candidate filter and the feedback engine.
//! Everything here is pure and deterministic.

mod error;
mod pattern;
mod word;

pub use error::AbsurdleError;
pub use pattern::{Feedback, Pattern};
pub use word::Word;
