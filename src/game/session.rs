//! A single Absurdle game
//!
//! Owns the candidate set and the history of turns. The engine narrows the
//! candidates; deciding when the game is over happens here.

use super::GameConfig;
use crate::adversary::{CandidateSet, evaluate};
use crate::core::{AbsurdleError, Pattern, Word};
use log::info;

/// One guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Absurdle game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    candidates: CandidateSet,
    turns: Vec<Turn>,
}

impl Game {
    /// Start a game from dictionary tokens
    ///
    /// Tokens are normalised according to `config` and then filtered to the
    /// configured word length.
    ///
    /// # Errors
    /// Returns [`AbsurdleError::InvalidWordLength`] if the configured length
    /// is 0.
    ///
    /// # Examples
    /// ```
    /// use absurdle::game::{Game, GameConfig};
    ///
    /// let mut game = Game::new(["arise", "berry", "ferry"], GameConfig::new(5)).unwrap();
    /// let turn = game.guess("FERRY").unwrap();
    /// assert_eq!(turn.pattern.to_emoji(), "⬜🟨🟨⬜⬜");
    /// assert!(!game.is_finished());
    ///
    /// game.guess("arise").unwrap();
    /// assert!(game.is_finished());
    /// ```
    pub fn new<I, S>(tokens: I, config: GameConfig) -> Result<Self, AbsurdleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = tokens.into_iter().map(|t| config.normalize(t.as_ref()));
        let candidates = CandidateSet::build(normalized, config.word_length)?;
        Ok(Self::from_candidates(candidates, config))
    }

    /// Start a game from an existing candidate set
    ///
    /// The candidate set's word length takes precedence over `config`.
    #[must_use]
    pub fn from_candidates(candidates: CandidateSet, config: GameConfig) -> Self {
        info!(
            "new game with {} candidates of length {}",
            candidates.len(),
            candidates.word_length()
        );
        Self {
            config: GameConfig {
                word_length: candidates.word_length(),
                ..config
            },
            candidates,
            turns: Vec::new(),
        }
    }

    /// Play a guess and record the feedback
    ///
    /// # Errors
    /// Returns [`AbsurdleError::EmptyCandidateSet`] if the dictionary had no
    /// words of the configured length, or [`AbsurdleError::LengthMismatch`]
    /// if the guess has the wrong length. Failed guesses are not recorded.
    pub fn guess(&mut self, text: &str) -> Result<&Turn, AbsurdleError> {
        let guess = Word::new(self.config.normalize(text.trim()));
        let candidates_before = self.candidates.len();
        let pattern = evaluate(&guess, &mut self.candidates)?;

        self.turns.push(Turn {
            guess,
            pattern,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        let turn = &self.turns[self.turns.len() - 1];
        info!(
            "turn {}: {} -> {} ({} -> {} candidates)",
            self.turns.len(),
            turn.guess,
            turn.pattern,
            turn.candidates_before,
            turn.candidates_after
        );
        Ok(turn)
    }

    /// Check whether the last feedback was all correct
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.turns.last().is_some_and(|turn| turn.pattern.is_perfect())
    }

    /// All turns played so far
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Patterns returned so far, in order
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.turns.iter().map(|turn| &turn.pattern)
    }

    /// Words still consistent with every pattern returned
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Game-ending predicate over a pattern history
///
/// True when the most recent pattern has no absent and no present symbols.
/// An empty history is never finished.
#[must_use]
pub fn is_finished(patterns: &[Pattern]) -> bool {
    patterns.last().is_some_and(Pattern::is_perfect)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "arise", "raise", "stale", "share", "stone", "tears", "crane", "slate", "berry", "ferry",
        "cat", "apples",
    ];

    fn game() -> Game {
        Game::new(WORDS, GameConfig::default()).unwrap()
    }

    #[test]
    fn new_game_filters_dictionary() {
        let game = game();
        assert_eq!(game.candidates().len(), 10);
        assert_eq!(game.word_length(), 5);
        assert!(game.turns().is_empty());
        assert!(!game.is_finished());
    }

    #[test]
    fn new_game_rejects_zero_length() {
        let err = Game::new(WORDS, GameConfig::new(0)).unwrap_err();
        assert_eq!(err, AbsurdleError::InvalidWordLength { length: 0 });
    }

    #[test]
    fn dictionary_case_is_normalized() {
        let game = Game::new(["ARISE", "arise", "Berry"], GameConfig::default()).unwrap();
        assert_eq!(game.candidates().len(), 2);
        assert!(game.candidates().contains("berry"));
    }

    #[test]
    fn case_sensitive_game_keeps_case() {
        let config = GameConfig::default().with_normalize_case(false);
        let mut game = Game::new(["ARISE", "arise"], config).unwrap();
        assert_eq!(game.candidates().len(), 2);

        let turn = game.guess("ARISE").unwrap();
        assert!(!turn.pattern.is_perfect());
    }

    #[test]
    fn guess_records_turn() {
        let mut game = game();
        let turn = game.guess("  Stare ").unwrap().clone();

        assert_eq!(turn.guess.text(), "stare");
        assert_eq!(turn.candidates_before, 10);
        assert_eq!(turn.candidates_after, game.candidates().len());
        assert_eq!(game.turns().len(), 1);
        assert_eq!(game.patterns().next(), Some(&turn.pattern));
    }

    #[test]
    fn wrong_length_guess_is_not_recorded() {
        let mut game = game();
        let err = game.guess("cat").unwrap_err();

        assert_eq!(
            err,
            AbsurdleError::LengthMismatch {
                expected: 5,
                actual: 3
            }
        );
        assert!(game.turns().is_empty());
        assert_eq!(game.candidates().len(), 10);
    }

    #[test]
    fn empty_dictionary_reports_no_candidates() {
        let mut game = Game::new(["cat", "dog"], GameConfig::default()).unwrap();
        assert_eq!(
            game.guess("crane").unwrap_err(),
            AbsurdleError::EmptyCandidateSet
        );
    }

    #[test]
    fn playing_remaining_candidates_finishes() {
        let mut game = game();
        let limit = game.candidates().len();

        for _ in 0..limit {
            if game.is_finished() {
                break;
            }
            let next = game.candidates().sorted()[0].text().to_string();
            game.guess(&next).unwrap();
        }

        assert!(game.is_finished());
        assert!(game.turns().len() <= limit);
        assert!(
            game.turns()
                .windows(2)
                .all(|w| w[1].candidates_after <= w[0].candidates_after)
        );
    }

    #[test]
    fn from_candidates_uses_set_length() {
        let set = CandidateSet::build(["cat", "dog"], 3).unwrap();
        let game = Game::from_candidates(set, GameConfig::default());
        assert_eq!(game.word_length(), 3);
        assert_eq!(game.config().word_length, 3);
    }

    #[test]
    fn is_finished_predicate() {
        let p = |s: &str| Pattern::from_str(s).unwrap();

        assert!(!is_finished(&[]));
        assert!(!is_finished(&[p("GGGYG")]));
        assert!(!is_finished(&[p("GGGGG"), p("-GGGG")]));
        assert!(is_finished(&[p("-Y---"), p("GGGGG")]));
    }
}
