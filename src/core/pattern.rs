//! Feedback pattern calculation and representation
//!
//! A pattern holds one [`Feedback`] symbol per letter of the guess:
//! - `Absent` (⬜): letter not in the word, or all its copies already credited
//! - `Present` (🟨): letter in the word, wrong position
//! - `Correct` (🟩): letter in the correct position
//!
//! Patterns are totally ordered: symbols order as `Absent < Present < Correct`
//! and patterns compare position by position. This is the same order as
//! comparing the emoji renderings as strings (U+2B1C < U+1F7E8 < U+1F7E9),
//! and it decides ties between equally large candidate groups.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
///
/// Variant order is significant: it defines the pattern sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Letter not in word (gray)
    Absent,
    /// Letter in word, wrong position (yellow)
    Present,
    /// Letter in correct position (green)
    Correct,
}

impl Feedback {
    /// Emoji square used to render this symbol
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Parse a symbol from a letter or emoji square
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess against one candidate word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Box<[Feedback]>);

impl Pattern {
    /// Create a pattern from individual feedback symbols
    #[must_use]
    pub fn new(feedback: Vec<Feedback>) -> Self {
        Self(feedback.into_boxed_slice())
    }

    /// All-correct pattern of the given length
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self(vec![Feedback::Correct; length].into_boxed_slice())
    }

    /// Calculate the pattern when `guess` is played and `answer` is the word
    ///
    /// This implements Wordle's feedback rules, including proper handling
    /// of duplicate letters. Both words are expected to have the same length;
    /// positions past the end of `answer` can only be `Present` or `Absent`.
    ///
    /// # Algorithm
    /// 1. Count every letter of the answer
    /// 2. Mark all exact matches and remove them from the available pool
    /// 3. Left to right, mark remaining guess letters present while the pool
    ///    still holds a copy
    /// 4. Everything else is absent
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane");
    /// let answer = Word::new("slate");
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "pattern lengths differ");

        let mut result = vec![Feedback::Absent; guess.len()];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (slot, (letter, target)) in result
            .iter_mut()
            .zip(guess.chars().iter().zip(answer.chars()))
        {
            if letter == target {
                *slot = Feedback::Correct;
                if let Some(count) = answer_available.get_mut(letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an uncredited copy remains
        for (slot, letter) in result.iter_mut().zip(guess.chars()) {
            if *slot == Feedback::Absent
                && let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Self::new(result)
    }

    /// Number of symbols in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the pattern has no symbols
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.0
    }

    /// Check if every position is correct
    ///
    /// An empty pattern is never perfect.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Correct)
    }

    /// Count positions carrying the given symbol
    #[must_use]
    pub fn count(&self, symbol: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == symbol).count()
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Feedback::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Feedback::Present)
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Any non-empty length is accepted; see [`Feedback::from_char`] for the
    /// recognised symbols.
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        s.chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().copied().map(Feedback::to_emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
