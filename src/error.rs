//! Configuration and usage errors
//!
//! Everything that can stop a game before it starts, and the process exit
//! status the binary reports for each error and for each game result.

use crate::core::GameResult;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid command-line configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Usage: unscramble [--min-length numchars] [--dict file] [--letters chars]")]
    Usage,

    #[error("minimum length must be between 3 and 5")]
    InvalidMinLength(usize),

    #[error("letter set is invalid")]
    InvalidLetterSet,

    #[error("number of letters should be no more than 13")]
    TooManyLetters(usize),

    #[error("too few letters for the given minimum length ({min_length})")]
    TooFewLetters { min_length: usize },

    #[error("dictionary named \"{}\" cannot be opened", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Process exit status for this error
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Usage => 7,
            Self::InvalidMinLength(_) => 1,
            Self::InvalidLetterSet => 19,
            Self::TooManyLetters(_) => 13,
            Self::TooFewLetters { .. } => 11,
            Self::Dictionary { .. } => 6,
        }
    }

    /// Whether the message is a bare usage line rather than a program diagnostic
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage)
    }
}

/// Process exit status for a finished game
#[must_use]
pub const fn game_exit_status(result: GameResult) -> u8 {
    match result {
        GameResult::Completed(_) => 0,
        GameResult::NoGuesses => 18,
    }
}
