//! Word representation
//!
//! A Word stores its text together with its characters, so that pattern
//! calculation can index positions by Unicode scalar value rather than by byte.

use rustc_hash::FxHashMap;
use std::fmt;

/// A dictionary word or guess of arbitrary length
///
/// Length is counted in `char`s. Words are compared, hashed and ordered by
/// their text, so a sorted list of words is in plain string order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is kept exactly as given; case normalisation is the caller's
    /// decision (see [`crate::game::GameConfig`]).
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    ///
    /// let word = Word::new("naïve");
    /// assert_eq!(word.text(), "naïve");
    /// assert_eq!(word.len(), 5);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the characters of the word in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check whether the word has no characters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// Returns `None` if `position` is past the end of the word.
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for pattern calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_keeps_text() {
        let word = Word::new("crane");
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_is_case_sensitive() {
        assert_ne!(Word::new("Crane"), Word::new("crane"));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        let word = Word::new("héllo");
        assert_eq!(word.text().len(), 6);
        assert_eq!(word.len(), 5);
        assert_eq!(word.char_at(1), Some('é'));
    }

    #[test]
    fn word_char_at_out_of_range() {
        let word = Word::new("cat");
        assert_eq!(word.char_at(2), Some('t'));
        assert_eq!(word.char_at(3), None);
    }

    #[test]
    fn word_empty() {
        let word = Word::new("");
        assert!(word.is_empty());
        assert_eq!(word.len(), 0);
    }

    #[test]
    fn word_char_counts() {
        let counts = Word::new("speed").char_counts();
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'p'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'d'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn word_char_counts_all_same() {
        let counts = Word::new("aaaaa").char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&'a'), Some(&5));
    }

    #[test]
    fn word_ordering_follows_text() {
        let mut words = vec![Word::new("stone"), Word::new("arise"), Word::new("berry")];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["arise", "berry", "stone"]);
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", Word::from("crane")), "crane");
        assert_eq!(Word::from(String::from("slate")).to_string(), "slate");
    }
}
