//! Automatic players
//!
//! Strategies that play against the adversary, used to benchmark how long
//! the adversary can stall.

pub mod minimax;
pub mod strategy;

pub use strategy::{AlphabeticalStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
