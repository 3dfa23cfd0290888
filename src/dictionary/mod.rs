//! Dictionaries for Absurdle
//!
//! Provides the embedded default dictionary and loading from word files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversary::CandidateSet;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_lowercase_tokens() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn dictionary_supports_default_length() {
        let set = CandidateSet::build(DICTIONARY, 5).unwrap();
        assert!(set.len() > 100);
        assert!(set.contains("arise"));
        assert!(set.contains("berry"));
        assert!(set.contains("ferry"));
    }

    #[test]
    fn dictionary_has_other_lengths() {
        for length in [3, 4, 6] {
            let set = CandidateSet::build(DICTIONARY, length).unwrap();
            assert!(!set.is_empty(), "no {length}-letter words");
        }
    }
}
