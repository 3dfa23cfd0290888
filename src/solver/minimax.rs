//! Minimax guess selection against the adversary
//!
//! The adversary always keeps the largest pattern group, so the best a
//! guesser can do is pick the word whose largest group is smallest.

use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Calculate the number of candidates the adversary keeps after `guess`
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("berry");
/// let candidates = [Word::new("berry"), Word::new("ferry"), Word::new("merry")];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// assert_eq!(calculate_max_remaining(&guess, &refs), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[&Word]) -> usize {
    let mut counts: FxHashMap<Pattern, usize> = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(Pattern::calculate(guess, candidate)).or_insert(0) += 1;
    }

    counts.values().max().copied().unwrap_or(0)
}

/// Select the guess that minimises the worst-case remaining candidates
///
/// Ties go to the alphabetically first word. Returns `None` if the guess
/// pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, usize)> {
    guess_pool
        .par_iter()
        .map(|&guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by(|(a, a_max), (b, b_max)| a_max.cmp(b_max).then_with(|| a.cmp(b)))
}
