//! Game configuration

/// Word length used when none is requested
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Configuration for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of letters in every candidate and guess
    pub word_length: usize,
    /// Lowercase dictionary words and guesses before use
    pub normalize_case: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            normalize_case: true,
        }
    }

    #[must_use]
    pub const fn with_normalize_case(mut self, normalize_case: bool) -> Self {
        self.normalize_case = normalize_case;
        self
    }

    /// Apply the configured case handling to a dictionary word or guess
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        if self.normalize_case {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH)
    }
}
