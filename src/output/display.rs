//! Coloured terminal output

use super::formatters::{outcome_message, result_message};
use crate::core::{GameResult, GuessOutcome};
use crate::error::ConfigError;
use colored::Colorize;

/// Whether messages are decorated with colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Colored,
}

impl Style {
    /// Render the feedback for a guess
    #[must_use]
    pub fn outcome(self, outcome: &GuessOutcome) -> String {
        let text = outcome_message(outcome);
        match self {
            Self::Plain => text,
            Self::Colored if outcome.is_accepted() => text.green().bold().to_string(),
            Self::Colored => text.yellow().to_string(),
        }
    }

    /// Render the closing line
    #[must_use]
    pub fn result(self, result: GameResult) -> String {
        let text = result_message(result);
        match (self, result) {
            (Self::Plain, _) => text,
            (Self::Colored, GameResult::Completed(_)) => text.bright_green().bold().to_string(),
            (Self::Colored, GameResult::NoGuesses) => text.bright_black().to_string(),
        }
    }
}

/// Print a configuration error to stderr
pub fn print_config_error(error: &ConfigError) {
    if error.is_usage() {
        eprintln!("{error}");
    } else {
        eprintln!("{} {error}", "unscramble:".red().bold());
    }
}

/// Print any other fatal error to stderr
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", "unscramble:".red().bold());
}
