//! Game session
//!
//! Drives the adversary one guess at a time and decides when the game ends.

mod config;
mod session;

pub use config::{DEFAULT_WORD_LENGTH, GameConfig};
pub use session::{Game, Turn, is_finished};
