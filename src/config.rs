//! Game configuration
//!
//! Turns raw command-line values into a validated letter pool, minimum length
//! and dictionary source, generating random letters when none are supplied.

use crate::core::{Dictionary, GameSession, LetterPool};
use crate::error::ConfigError;
use crate::wordlists::loader;
use rand::Rng;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Minimum guess length used when none is given
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Accepted values for the minimum guess length
pub const MIN_LENGTH_RANGE: RangeInclusive<usize> = 3..=5;

/// Largest letter pool a player may supply
pub const MAX_LETTERS: usize = 13;

/// Size of a randomly generated pool
pub const RANDOM_LETTERS: usize = 7;

/// Dictionary path used when none is given
pub const DEFAULT_DICTIONARY: &str = "words.txt";

/// `--dict` value selecting the embedded word list
pub const BUILTIN_DICTIONARY: &str = "builtin";

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The list compiled into the binary
    Builtin,
    /// A text file with one word per line
    File(PathBuf),
}

impl DictionarySource {
    /// Interpret a `--dict` value
    ///
    /// Only the exact value `builtin` selects the embedded list; a file of that
    /// name is reached as `./builtin`.
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        if value == BUILTIN_DICTIONARY {
            Self::Builtin
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Load the dictionary
    ///
    /// # Errors
    /// Returns `ConfigError::Dictionary` if the file cannot be opened or read.
    pub fn load(&self) -> Result<Dictionary, ConfigError> {
        match self {
            Self::Builtin => Ok(loader::builtin()),
            Self::File(path) => {
                loader::load_from_file(path).map_err(|source| ConfigError::Dictionary {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

impl Default for DictionarySource {
    fn default() -> Self {
        Self::File(Path::new(DEFAULT_DICTIONARY).to_path_buf())
    }
}

/// Validated settings for one game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub min_length: usize,
    pub pool: LetterPool,
    pub dictionary: DictionarySource,
}

impl GameConfig {
    /// Validate the minimum length and letters, generating letters with `rng` if absent
    ///
    /// The minimum length is checked before the letters.
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn new<R: Rng>(
        min_length: usize,
        letters: Option<&str>,
        dictionary: DictionarySource,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        validate_min_length(min_length)?;

        let pool = match letters {
            Some(letters) => validate_letters(letters, min_length)?,
            None => {
                let letters = random_letters(rng, RANDOM_LETTERS);
                debug!(letters = letters.as_str(), "generated random letters");
                LetterPool::new(letters).map_err(|_| ConfigError::InvalidLetterSet)?
            }
        };

        Ok(Self {
            min_length,
            pool,
            dictionary,
        })
    }

    /// Load the dictionary and start a session
    ///
    /// # Errors
    /// Returns `ConfigError::Dictionary` if the dictionary cannot be loaded.
    pub fn into_session(self) -> Result<GameSession, ConfigError> {
        let dictionary = self.dictionary.load()?;
        Ok(GameSession::new(self.pool, self.min_length, dictionary))
    }
}

/// Parse a `--min-length` value
///
/// Only a single ASCII non-letter is accepted. A digit reads as its value and
/// any other symbol as 0, which then fails [`validate_min_length`].
///
/// # Errors
/// Returns `ConfigError::Usage` for an empty value, more than one character,
/// a letter, or a non-ASCII character.
pub fn parse_min_length(value: &str) -> Result<usize, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() && !ch.is_ascii_alphabetic() => {
            Ok(ch.to_digit(10).map_or(0, |digit| digit as usize))
        }
        _ => Err(ConfigError::Usage),
    }
}

/// Check the minimum guess length lies in [`MIN_LENGTH_RANGE`]
///
/// # Errors
/// Returns `ConfigError::InvalidMinLength` otherwise.
pub fn validate_min_length(min_length: usize) -> Result<(), ConfigError> {
    if MIN_LENGTH_RANGE.contains(&min_length) {
        Ok(())
    } else {
        Err(ConfigError::InvalidMinLength(min_length))
    }
}

/// Validate a player-supplied letter set
///
/// Checks, in order: only ASCII letters, at most [`MAX_LETTERS`], at least `min_length`.
///
/// # Errors
/// Returns `InvalidLetterSet`, `TooManyLetters` or `TooFewLetters`.
pub fn validate_letters(letters: &str, min_length: usize) -> Result<LetterPool, ConfigError> {
    let pool = LetterPool::new(letters).map_err(|_| ConfigError::InvalidLetterSet)?;
    if pool.len() > MAX_LETTERS {
        return Err(ConfigError::TooManyLetters(pool.len()));
    }
    if pool.len() < min_length {
        return Err(ConfigError::TooFewLetters { min_length });
    }
    Ok(pool)
}

/// Generate `length` independent, uniformly chosen uppercase letters
#[must_use]
pub fn random_letters<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect()
}
