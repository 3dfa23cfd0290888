//! Guess selection strategies
//!
//! Automatic players used to simulate games against the adversary. Every
//! strategy guesses a current candidate, so a game always ends within as many
//! guesses as there were candidates.

use crate::adversary::CandidateSet;
use crate::core::Word;

/// A strategy for choosing the next guess
pub trait Strategy {
    /// Select the next guess from the remaining candidates
    ///
    /// Returns `None` only if no candidates remain.
    fn select_guess<'a>(&self, candidates: &'a CandidateSet) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Minimise the group the adversary can keep (default)
    Minimax(MinimaxStrategy),
    /// First remaining candidate in alphabetical order
    Alphabetical(AlphabeticalStrategy),
    /// Random remaining candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a CandidateSet) -> Option<&'a Word> {
        match self {
            Self::Minimax(s) => s.select_guess(candidates),
            Self::Alphabetical(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "alphabetical" (or "first"), "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabetical" | "first" => Self::Alphabetical(AlphabeticalStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Alphabetical(_) => "alphabetical",
            Self::Random(_) => "random",
        }
    }
}

/// Minimax strategy
///
/// Guesses the candidate whose largest pattern group is smallest.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, candidates: &'a CandidateSet) -> Option<&'a Word> {
        let pool = candidates.sorted();
        super::minimax::select_best_guess(&pool, &pool).map(|(best, _)| best)
    }
}

/// Alphabetical strategy
///
/// Deterministic baseline: always guesses the first remaining candidate.
pub struct AlphabeticalStrategy;

impl Strategy for AlphabeticalStrategy {
    fn select_guess<'a>(&self, candidates: &'a CandidateSet) -> Option<&'a Word> {
        candidates.iter().min()
    }
}

/// Random strategy
///
/// Guesses a uniformly random remaining candidate.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &'a CandidateSet) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        let pool = candidates.sorted();
        pool.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversary::evaluate;

    fn candidates() -> CandidateSet {
        CandidateSet::build(
            ["stone", "berry", "ferry", "merry", "arise", "raise", "stale"],
            5,
        )
        .unwrap()
    }

    fn play_out<S: Strategy>(strategy: &S) -> usize {
        let mut set = candidates();
        let limit = set.len();
        for turn in 1..=limit {
            let guess = strategy.select_guess(&set).unwrap().clone();
            assert!(set.contains(guess.text()));
            if evaluate(&guess, &mut set).unwrap().is_perfect() {
                return turn;
            }
        }
        panic!("game did not finish within {limit} guesses");
    }

    #[test]
    fn from_name_maps_strategies() {
        assert_eq!(StrategyType::from_name("minimax").name(), "minimax");
        assert_eq!(StrategyType::from_name("first").name(), "alphabetical");
        assert_eq!(StrategyType::from_name("alphabetical").name(), "alphabetical");
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("unknown").name(), "minimax");
    }

    #[test]
    fn alphabetical_picks_first_word() {
        let set = candidates();
        let guess = AlphabeticalStrategy.select_guess(&set).unwrap();
        assert_eq!(guess.text(), "arise");
    }

    #[test]
    fn random_picks_a_candidate() {
        let set = candidates();
        for _ in 0..10 {
            let guess = RandomStrategy.select_guess(&set).unwrap();
            assert!(set.contains(guess.text()));
        }
    }

    #[test]
    fn minimax_picks_a_candidate() {
        let set = candidates();
        let guess = MinimaxStrategy.select_guess(&set).unwrap();
        assert!(set.contains(guess.text()));
    }

    #[test]
    fn every_strategy_finishes() {
        assert!(play_out(&MinimaxStrategy) <= 7);
        assert!(play_out(&AlphabeticalStrategy) <= 7);
        assert!(play_out(&RandomStrategy) <= 7);
        assert!(play_out(&StrategyType::from_name("minimax")) <= 7);
    }

    #[test]
    fn empty_set_has_no_guess() {
        let set = CandidateSet::build(["cat"], 5).unwrap();
        assert!(MinimaxStrategy.select_guess(&set).is_none());
        assert!(AlphabeticalStrategy.select_guess(&set).is_none());
        assert!(RandomStrategy.select_guess(&set).is_none());
    }
}
