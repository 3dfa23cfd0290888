//! Adversarial feedback engine
//!
//! Instead of committing to a secret word, the adversary keeps every word
//! still consistent with the feedback it has given and, for each guess,
//! answers with the pattern shared by the most of them.

mod candidates;
mod engine;
mod partition;
mod selector;

pub use candidates::{CandidateSet, build_candidates};
pub use engine::evaluate;
pub use partition::{PatternGroups, group_by_pattern};
pub use selector::select_largest_group;
