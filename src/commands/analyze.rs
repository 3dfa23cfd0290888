//! Partition analysis command
//!
//! Shows how a guess would split the candidate set and which group the
//! adversary would keep, without playing the guess.

use crate::adversary::{CandidateSet, group_by_pattern, select_largest_group};
use crate::core::{AbsurdleError, Pattern, Word};

/// Number of sample words listed per group
const SAMPLE_SIZE: usize = 5;

/// One pattern group in an analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub pattern: Pattern,
    pub size: usize,
    /// First few members in alphabetical order
    pub sample: Vec<String>,
}

/// Result of analysing a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub guess: String,
    pub total_candidates: usize,
    pub group_count: usize,
    /// Pattern the adversary would answer with
    pub chosen: Pattern,
    pub chosen_size: usize,
    /// Largest groups first; equal sizes in pattern order
    pub groups: Vec<GroupSummary>,
}

/// Analyse how `guess` partitions the candidates
///
/// Lists at most `top` groups. The candidate set is not modified.
///
/// # Errors
///
/// Same preconditions as [`crate::adversary::evaluate`]:
/// [`AbsurdleError::EmptyCandidateSet`] then
/// [`AbsurdleError::LengthMismatch`].
pub fn analyze_guess(
    guess: &str,
    candidates: &CandidateSet,
    top: usize,
) -> Result<AnalysisResult, AbsurdleError> {
    let guess = Word::new(guess);

    if candidates.is_empty() {
        return Err(AbsurdleError::EmptyCandidateSet);
    }
    if guess.len() != candidates.word_length() {
        return Err(AbsurdleError::LengthMismatch {
            expected: candidates.word_length(),
            actual: guess.len(),
        });
    }

    let groups = group_by_pattern(&guess, candidates.sorted());
    let (chosen, chosen_members) =
        select_largest_group(&groups).ok_or(AbsurdleError::EmptyCandidateSet)?;

    let mut summaries: Vec<GroupSummary> = groups
        .iter()
        .map(|(pattern, members)| GroupSummary {
            pattern: pattern.clone(),
            size: members.len(),
            sample: members
                .iter()
                .take(SAMPLE_SIZE)
                .map(|w| w.text().to_string())
                .collect(),
        })
        .collect();
    // Stable sort keeps pattern order among equal sizes
    summaries.sort_by(|a, b| b.size.cmp(&a.size));
    summaries.truncate(top);

    Ok(AnalysisResult {
        guess: guess.text().to_string(),
        total_candidates: candidates.len(),
        group_count: groups.len(),
        chosen: chosen.clone(),
        chosen_size: chosen_members.len(),
        groups: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversary::evaluate;

    fn candidates() -> CandidateSet {
        CandidateSet::build(["berry", "ferry", "merry", "arise", "raise", "stone"], 5).unwrap()
    }

    #[test]
    fn analysis_matches_evaluate() {
        let set = candidates();
        let result = analyze_guess("berry", &set, 10).unwrap();

        let mut played = set.clone();
        let pattern = evaluate(&Word::new("berry"), &mut played).unwrap();

        assert_eq!(result.chosen, pattern);
        assert_eq!(result.chosen_size, played.len());
        assert_eq!(set.len(), 6, "analysis must not narrow the set");
    }

    #[test]
    fn groups_sorted_by_size_then_pattern() {
        let result = analyze_guess("berry", &candidates(), 10).unwrap();

        let sizes: Vec<usize> = result.groups.iter().map(|g| g.size).collect();
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(sizes.iter().sum::<usize>(), 6);
        assert_eq!(result.group_count, result.groups.len());

        for pair in result.groups.windows(2) {
            if pair[0].size == pair[1].size {
                assert!(pair[0].pattern < pair[1].pattern);
            }
        }
        assert_eq!(result.groups[0].pattern, result.chosen);
    }

    #[test]
    fn samples_are_alphabetical() {
        let result = analyze_guess("zzzzz", &candidates(), 10).unwrap();
        assert_eq!(result.group_count, 1);
        assert_eq!(
            result.groups[0].sample,
            ["arise", "berry", "ferry", "merry", "raise"]
        );
        assert_eq!(result.chosen_size, 6);
    }

    #[test]
    fn top_limits_groups() {
        let result = analyze_guess("berry", &candidates(), 1).unwrap();
        assert_eq!(result.groups.len(), 1);
        assert!(result.group_count > 1);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            analyze_guess("cat", &candidates(), 5).unwrap_err(),
            AbsurdleError::LengthMismatch {
                expected: 5,
                actual: 3
            }
        );
    }

    #[test]
    fn rejects_empty_candidates() {
        let empty = CandidateSet::build(["cat"], 5).unwrap();
        assert_eq!(
            analyze_guess("crane", &empty, 5).unwrap_err(),
            AbsurdleError::EmptyCandidateSet
        );
    }
}
