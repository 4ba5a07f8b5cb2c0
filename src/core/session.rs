//! Game session: validates guesses and keeps the running score
//!
//! A session is created from validated inputs, fed one raw guess at a time via
//! [`GameSession::submit_guess`], and consumed by [`GameSession::finalize`].

use super::{Dictionary, GuessLedger, LetterMultiset, LetterPool, score_delta};
use tracing::{debug, info, trace};

/// Result of submitting one guess
///
/// Every variant other than `Accepted` is a rejection that leaves the session
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Contains a character that is not an ASCII letter
    NonAlphabetic,
    /// Shorter than the session's minimum length
    TooShort { min_length: usize },
    /// Longer than the letter pool
    TooLong { max_length: usize },
    /// Needs letters (or more copies of a letter) than the pool has
    Unformable,
    /// Accepted earlier in this session
    AlreadyGuessed,
    /// Not in the dictionary
    NotInDictionary,
    /// Recorded; `points` were added, bringing the total to `score`
    Accepted {
        word: String,
        points: usize,
        score: usize,
    },
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Final outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// No guess was ever accepted
    NoGuesses,
    /// At least one guess was accepted; carries the final score
    Completed(usize),
}

/// One run of the game
#[derive(Debug)]
pub struct GameSession {
    pool: LetterPool,
    min_length: usize,
    dictionary: Dictionary,
    ledger: GuessLedger,
    score: usize,
}

impl GameSession {
    /// Start a session
    ///
    /// `min_length` must be at least 1 so that every accepted guess scores a
    /// positive amount; a zero score then means nothing was accepted.
    #[must_use]
    pub fn new(pool: LetterPool, min_length: usize, dictionary: Dictionary) -> Self {
        debug_assert!(min_length >= 1, "minimum length must be positive");
        Self {
            pool,
            min_length,
            dictionary,
            ledger: GuessLedger::new(),
            score: 0,
        }
    }

    /// Validate `raw` and, if it passes every check, record it and add its points
    ///
    /// Checks run in a fixed order and stop at the first failure: alphabetic,
    /// minimum length, maximum length, formable from the pool, not guessed
    /// before, present in the dictionary.
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::{Dictionary, GameSession, GuessOutcome, LetterPool};
    ///
    /// let pool = LetterPool::new("listen").unwrap();
    /// let mut session = GameSession::new(pool, 3, Dictionary::new(["list"]));
    ///
    /// assert!(session.submit_guess("list").is_accepted());
    /// assert_eq!(session.submit_guess("LIST"), GuessOutcome::AlreadyGuessed);
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        let outcome = self.evaluate(raw);
        match &outcome {
            GuessOutcome::Accepted {
                word,
                points,
                score,
            } => debug!(word = word.as_str(), points, score, "guess accepted"),
            rejected => trace!(guess = raw, outcome = ?rejected, "guess rejected"),
        }
        outcome
    }

    fn evaluate(&mut self, raw: &str) -> GuessOutcome {
        let Ok(letters) = LetterMultiset::new(raw) else {
            return GuessOutcome::NonAlphabetic;
        };

        // Only ASCII letters remain, so byte length is letter count
        let length = raw.len();
        if length < self.min_length {
            return GuessOutcome::TooShort {
                min_length: self.min_length,
            };
        }
        if length > self.pool.len() {
            return GuessOutcome::TooLong {
                max_length: self.pool.len(),
            };
        }
        if !letters.can_form_from(self.pool.multiset()) {
            return GuessOutcome::Unformable;
        }

        let word = raw.to_ascii_uppercase();
        if self.ledger.already_guessed(&word) {
            return GuessOutcome::AlreadyGuessed;
        }
        if !self.dictionary.contains(&word) {
            return GuessOutcome::NotInDictionary;
        }

        let points = score_delta(length, self.pool.len());
        self.ledger.record(&word);
        self.score += points;

        GuessOutcome::Accepted {
            word,
            points,
            score: self.score,
        }
    }

    /// End the session
    #[must_use]
    pub fn finalize(self) -> GameResult {
        let result = if self.score == 0 {
            GameResult::NoGuesses
        } else {
            GameResult::Completed(self.score)
        };
        info!(
            score = self.score,
            accepted = self.ledger.len(),
            "session finalized"
        );
        result
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &LetterPool {
        &self.pool
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Accepted words, uppercased, in the order they were guessed
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        self.ledger.words()
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(letters: &str, min_length: usize, words: &[&str]) -> GameSession {
        GameSession::new(
            LetterPool::new(letters).unwrap(),
            min_length,
            Dictionary::new(words),
        )
    }

    fn listen() -> GameSession {
        session("LISTEN", 3, &["LIST", "TEN", "SILENT"])
    }

    #[test]
    fn listen_scenario() {
        let mut game = listen();

        assert!(matches!(
            game.submit_guess("list"),
            GuessOutcome::Accepted { score: 4, points: 4, .. }
        ));
        assert!(matches!(
            game.submit_guess("ten"),
            GuessOutcome::Accepted { score: 7, points: 3, .. }
        ));
        assert_eq!(game.submit_guess("list"), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.score(), 7);
        assert_eq!(
            game.submit_guess("silentt"),
            GuessOutcome::TooLong { max_length: 6 }
        );
        assert_eq!(game.score(), 7);
        assert_eq!(game.guesses(), &["LIST".to_string(), "TEN".to_string()]);
        assert_eq!(game.finalize(), GameResult::Completed(7));
    }

    #[test]
    fn full_pool_guess_earns_bonus() {
        let mut game = listen();
        assert_eq!(
            game.submit_guess("Silent"),
            GuessOutcome::Accepted {
                word: "SILENT".to_string(),
                points: 16,
                score: 16,
            }
        );
    }

    #[test]
    fn five_letter_pool_scoring() {
        let mut game = session("crate", 3, &["crate", "cat"]);
        assert!(matches!(
            game.submit_guess("cat"),
            GuessOutcome::Accepted { points: 3, .. }
        ));
        assert!(matches!(
            game.submit_guess("trace"),
            GuessOutcome::NotInDictionary
        ));
        assert!(matches!(
            game.submit_guess("CRATE"),
            GuessOutcome::Accepted {
                points: 15,
                score: 18,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_ignores_case() {
        let mut game = session("tacos", 3, &["cat"]);
        assert!(game.submit_guess("cat").is_accepted());
        assert_eq!(game.submit_guess("CAT"), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.submit_guess("cAt"), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn non_alphabetic_is_checked_first() {
        let mut game = listen();
        assert_eq!(game.submit_guess("l1st"), GuessOutcome::NonAlphabetic);
        assert_eq!(game.submit_guess("li st"), GuessOutcome::NonAlphabetic);
        assert_eq!(game.submit_guess("x!"), GuessOutcome::NonAlphabetic);
        assert_eq!(game.submit_guess("lïst"), GuessOutcome::NonAlphabetic);
    }

    #[test]
    fn minimum_length_boundary() {
        let mut game = session("listen", 4, &["list", "ten"]);
        assert_eq!(
            game.submit_guess("ten"),
            GuessOutcome::TooShort { min_length: 4 }
        );
        assert!(game.submit_guess("list").is_accepted());
    }

    #[test]
    fn empty_guess_is_too_short() {
        let mut game = listen();
        assert_eq!(
            game.submit_guess(""),
            GuessOutcome::TooShort { min_length: 3 }
        );
    }

    #[test]
    fn too_long_precedes_formability() {
        let mut game = session("cat", 3, &["cats"]);
        assert_eq!(
            game.submit_guess("zzzz"),
            GuessOutcome::TooLong { max_length: 3 }
        );
    }

    #[test]
    fn unformable_guesses() {
        let mut game = listen();
        assert_eq!(game.submit_guess("cat"), GuessOutcome::Unformable);
        // Only one E in the pool
        assert_eq!(game.submit_guess("seen"), GuessOutcome::Unformable);
    }

    #[test]
    fn unformable_precedes_already_guessed_and_dictionary() {
        let mut game = session("listen", 3, &["lest"]);
        assert_eq!(game.submit_guess("zest"), GuessOutcome::Unformable);
    }

    #[test]
    fn already_guessed_precedes_dictionary() {
        let mut game = listen();
        assert!(game.submit_guess("ten").is_accepted());
        assert_eq!(game.submit_guess("TEN"), GuessOutcome::AlreadyGuessed);
    }

    #[test]
    fn not_in_dictionary() {
        let mut game = listen();
        assert_eq!(game.submit_guess("tins"), GuessOutcome::NotInDictionary);
        assert_eq!(game.score(), 0);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn no_accepted_guesses_finalizes_to_no_guesses() {
        let mut game = listen();
        for raw in ["", "ab", "l1st", "cat", "silentt", "tins"] {
            assert!(!game.submit_guess(raw).is_accepted());
        }
        assert_eq!(game.finalize(), GameResult::NoGuesses);
    }

    #[test]
    fn fresh_session_finalizes_to_no_guesses() {
        assert_eq!(listen().finalize(), GameResult::NoGuesses);
    }

    #[test]
    fn accessors_expose_setup() {
        let game = listen();
        assert_eq!(game.pool().letters(), "LISTEN");
        assert_eq!(game.min_length(), 3);
        assert_eq!(game.dictionary().len(), 3);
        assert_eq!(game.score(), 0);
    }
}
