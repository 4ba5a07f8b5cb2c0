//! Message text for game events

use crate::core::{GameResult, GameSession, GuessOutcome};

/// Two-line greeting shown before the first guess
#[must_use]
pub fn welcome_message(session: &GameSession) -> String {
    format!(
        "Welcome to unscramble!\nEnter words of length {} to {} made from the letters \"{}\"",
        session.min_length(),
        session.pool().len(),
        session.pool()
    )
}

/// Feedback for one submitted guess
#[must_use]
pub fn outcome_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::NonAlphabetic => "Word must contain only letters".to_string(),
        GuessOutcome::TooShort { min_length } => {
            format!("Word too short - it must be at least {min_length} characters long")
        }
        GuessOutcome::TooLong { max_length } => {
            format!("Word must be no more than {max_length} characters long")
        }
        GuessOutcome::Unformable => "Word can't be formed with available letters".to_string(),
        GuessOutcome::AlreadyGuessed => "You've guessed that word before".to_string(),
        GuessOutcome::NotInDictionary => "Word can't be found in dictionary".to_string(),
        GuessOutcome::Accepted { score, .. } => format!("OK! Score so far is {score}"),
    }
}

/// Closing line once input runs out
#[must_use]
pub fn result_message(result: GameResult) -> String {
    match result {
        GameResult::NoGuesses => "No words guessed!".to_string(),
        GameResult::Completed(score) => format!("Your final score is {score}"),
    }
}
