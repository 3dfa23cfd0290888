//! Absurdle
//!
//! An adversarial take on Wordle. There is no secret word: after every guess
//! the adversary answers with the feedback pattern that keeps the largest
//! number of dictionary words alive, and the game only ends once a guess
//! leaves it no other choice than all correct.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::adversary::{CandidateSet, evaluate};
//! use absurdle::core::Word;
//!
//! let mut candidates = CandidateSet::build(["arise", "berry", "ferry"], 5).unwrap();
//!
//! let pattern = evaluate(&Word::new("ferry"), &mut candidates).unwrap();
//! assert_eq!(pattern.to_string(), "⬜🟨🟨⬜⬜");
//! assert_eq!(candidates.len(), 1);
//!
//! let pattern = evaluate(&Word::new("arise"), &mut candidates).unwrap();
//! assert!(pattern.is_perfect());
//! ```

// Core domain types
pub mod core;

// Candidate filter and adversarial feedback engine
pub mod adversary;

// Game session
pub mod game;

// Word lists
pub mod dictionary;

// Automatic players
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
