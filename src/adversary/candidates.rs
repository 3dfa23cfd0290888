//! Candidate filter
//!
//! Builds the working set of unique, equal-length words once at game start.

use crate::core::{AbsurdleError, Word};
use log::debug;
use rustc_hash::FxHashSet;

/// Set of words still consistent with all feedback given so far
///
/// Every member has exactly [`word_length`](Self::word_length) characters and
/// there are no duplicates. After construction the set only shrinks, through
/// [`evaluate`](super::evaluate). Iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: FxHashSet<Word>,
    word_length: usize,
}

impl CandidateSet {
    /// Build a candidate set from dictionary tokens
    ///
    /// Deduplicates the tokens and keeps only those with exactly `length`
    /// characters.
    ///
    /// # Errors
    /// Returns [`AbsurdleError::InvalidWordLength`] if `length` is 0.
    ///
    /// # Examples
    /// ```
    /// use absurdle::adversary::CandidateSet;
    ///
    /// let set = CandidateSet::build(["arise", "berry", "arise", "cat"], 5).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("berry"));
    /// assert!(!set.contains("cat"));
    ///
    /// assert!(CandidateSet::build(["cat"], 0).is_err());
    /// ```
    pub fn build<I, S>(tokens: I, length: usize) -> Result<Self, AbsurdleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if length == 0 {
            return Err(AbsurdleError::InvalidWordLength { length });
        }

        let mut seen = 0usize;
        let words: FxHashSet<Word> = tokens
            .into_iter()
            .inspect(|_| seen += 1)
            .filter(|token| token.as_ref().chars().count() == length)
            .map(|token| Word::new(token.as_ref()))
            .collect();

        debug!(
            "kept {} unique {length}-letter candidates out of {seen} dictionary tokens",
            words.len()
        );

        Ok(Self {
            words,
            word_length: length,
        })
    }

    /// Configured word length
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether no candidates remain
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `word` is still a candidate
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&Word::new(word))
    }

    /// Iterate over the candidates in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Candidates in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }

    /// Move every candidate out, leaving the set empty
    pub(crate) fn take_words(&mut self) -> Vec<Word> {
        self.words.drain().collect()
    }

    /// Replace the contents with a group taken from this set
    pub(crate) fn replace_with(&mut self, group: Vec<Word>) {
        debug_assert!(group.iter().all(|w| w.len() == self.word_length));
        self.words = group.into_iter().collect();
    }
}

/// Build a candidate set from dictionary tokens
///
/// Free-function form of [`CandidateSet::build`].
///
/// # Errors
/// Returns [`AbsurdleError::InvalidWordLength`] if `length` is 0.
pub fn build_candidates<I, S>(tokens: I, length: usize) -> Result<CandidateSet, AbsurdleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CandidateSet::build(tokens, length)
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::collections::hash_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
