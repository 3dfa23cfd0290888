//! Partitioning candidates by feedback pattern
//!
//! Given a guess, every candidate produces exactly one pattern. Grouping the
//! candidates by that pattern gives the choices available to the adversary.

use crate::core::{Pattern, Word};
use rayon::prelude::*;
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Candidates grouped by the pattern they produce, in ascending pattern order
///
/// `W` is either an owned [`Word`] (when the groups replace the candidate
/// set) or `&Word` (for read-only analysis).
pub type PatternGroups<W> = BTreeMap<Pattern, Vec<W>>;

/// Group words by the pattern they produce against `guess`
///
/// Patterns are computed in parallel; grouping is a sequential pass over the
/// results in input order, so the outcome does not depend on scheduling.
///
/// # Examples
/// ```
/// use absurdle::adversary::group_by_pattern;
/// use absurdle::core::Word;
///
/// let guess = Word::new("berry");
/// let words = vec![Word::new("berry"), Word::new("ferry"), Word::new("merry")];
/// let groups = group_by_pattern(&guess, words);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.values().map(Vec::len).sum::<usize>(), 3);
/// ```
pub fn group_by_pattern<W>(guess: &Word, words: Vec<W>) -> PatternGroups<W>
where
    W: Borrow<Word> + Send,
{
    let scored: Vec<(Pattern, W)> = words
        .into_par_iter()
        .map(|word| (Pattern::calculate(guess, word.borrow()), word))
        .collect();

    let mut groups: PatternGroups<W> = BTreeMap::new();
    for (pattern, word) in scored {
        groups.entry(pattern).or_default().push(word);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t)).collect()
    }

    #[test]
    fn groups_cover_every_word_once() {
        let guess = Word::new("crane");
        let candidates = words(&["slate", "irate", "crate", "grate", "trace"]);
        let groups = group_by_pattern(&guess, candidates);

        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), 5);
    }

    #[test]
    fn every_member_reproduces_its_pattern() {
        let guess = Word::new("stare");
        let candidates = words(&["arise", "raise", "stale", "share", "stone", "tears"]);
        let groups = group_by_pattern(&guess, candidates);

        for (pattern, members) in &groups {
            for word in members {
                assert_eq!(&Pattern::calculate(&guess, word), pattern);
            }
        }
    }

    #[test]
    fn identical_patterns_share_a_group() {
        // None of these share a letter with the guess
        let guess = Word::new("zzzzz");
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let groups = group_by_pattern(&guess, candidates);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.values().next().map(Vec::len), Some(3));
    }

    #[test]
    fn groups_iterate_in_pattern_order() {
        let guess = Word::new("ferry");
        let candidates = words(&["ferry", "berry", "arise"]);
        let groups = group_by_pattern(&guess, candidates);

        let keys: Vec<String> = groups.keys().map(Pattern::to_emoji).collect();
        assert_eq!(keys, ["⬜🟨🟨⬜⬜", "⬜🟩🟩🟩🟩", "🟩🟩🟩🟩🟩"]);
    }

    #[test]
    fn borrowed_words_are_grouped_too() {
        let guess = Word::new("berry");
        let owned = words(&["berry", "ferry", "merry"]);
        let refs: Vec<&Word> = owned.iter().collect();
        let groups = group_by_pattern(&guess, refs);

        let sizes: Vec<usize> = groups.values().map(Vec::len).collect();
        assert_eq!(sizes, [2, 1]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        let groups = group_by_pattern::<Word>(&Word::new("crane"), Vec::new());
        assert!(groups.is_empty());
    }
}
