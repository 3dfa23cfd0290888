//! Adversarial feedback engine
//!
//! Answers a guess with the pattern that keeps the most candidates alive and
//! narrows the candidate set to exactly those candidates.

use super::candidates::CandidateSet;
use super::partition::group_by_pattern;
use super::selector::select_largest_group;
use crate::core::{AbsurdleError, Pattern, Word};
use log::{debug, trace};

/// Evaluate a guess against the candidate set
///
/// Every candidate is scored against `guess`, the candidates are grouped by
/// pattern, and the largest group (smallest pattern on ties) replaces the
/// contents of `candidates`. The winning pattern is returned.
///
/// # Errors
/// Checked in this order, before the set is touched:
/// - [`AbsurdleError::EmptyCandidateSet`] if no candidates remain
/// - [`AbsurdleError::LengthMismatch`] if `guess` does not have the
///   candidate set's word length
///
/// # Examples
/// ```
/// use absurdle::adversary::{CandidateSet, evaluate};
/// use absurdle::core::Word;
///
/// let mut candidates = CandidateSet::build(["berry", "ferry", "merry"], 5).unwrap();
/// let pattern = evaluate(&Word::new("berry"), &mut candidates).unwrap();
///
/// assert_eq!(pattern.to_emoji(), "⬜🟩🟩🟩🟩");
/// assert_eq!(candidates.len(), 2);
/// assert!(!candidates.contains("berry"));
/// ```
pub fn evaluate(guess: &Word, candidates: &mut CandidateSet) -> Result<Pattern, AbsurdleError> {
    if candidates.is_empty() {
        return Err(AbsurdleError::EmptyCandidateSet);
    }
    if guess.len() != candidates.word_length() {
        return Err(AbsurdleError::LengthMismatch {
            expected: candidates.word_length(),
            actual: guess.len(),
        });
    }

    let before = candidates.len();
    let mut groups = group_by_pattern(guess, candidates.take_words());

    for (pattern, members) in &groups {
        trace!("{guess}: {pattern} keeps {} candidates", members.len());
    }

    // Non-empty input always yields at least one group
    let Some(pattern) = select_largest_group(&groups).map(|(pattern, _)| pattern.clone()) else {
        return Err(AbsurdleError::EmptyCandidateSet);
    };
    let kept = groups.remove(&pattern).unwrap_or_default();

    debug!(
        "{guess}: {} patterns over {before} candidates, keeping {} for {pattern}",
        groups.len() + 1,
        kept.len()
    );

    candidates.replace_with(kept);
    Ok(pattern)
}
