//! Letter multisets and the letter pool
//!
//! A `LetterMultiset` counts how often each (uppercased) letter occurs in a word.
//! Feasibility of a guess is decided by comparing the guess's multiset against
//! the pool's multiset.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Error type for strings that cannot be turned into letters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not an ASCII letter")]
    InvalidCharacter(char),
}

/// Case-insensitive letter → count mapping
///
/// Two strings that are anagrams of each other (ignoring case) produce equal multisets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: FxHashMap<u8, usize>,
}

impl LetterMultiset {
    /// Count the letters of `word`, canonicalizing each to uppercase
    ///
    /// # Errors
    /// Returns `LetterError::InvalidCharacter` for the first character that is
    /// not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::LetterMultiset;
    ///
    /// let a = LetterMultiset::new("Listen").unwrap();
    /// let b = LetterMultiset::new("SILENT").unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(LetterMultiset::new("c4t").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Self, LetterError> {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for ch in word.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(LetterError::InvalidCharacter(ch));
            }
            *counts.entry(ch.to_ascii_uppercase() as u8).or_insert(0) += 1;
        }
        Ok(Self { counts })
    }

    /// Number of occurrences of `letter` (case-insensitive)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.counts
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Total number of letters counted
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Check whether every letter of `self` is covered by `pool` with sufficient count
    #[inline]
    #[must_use]
    pub fn can_form_from(&self, pool: &Self) -> bool {
        can_form(self, pool)
    }
}

/// Decide whether `candidate` can be spelled with the letters of `pool`
///
/// Every distinct letter of `candidate` with count *c* must appear in `pool`
/// at least *c* times. Letters of `pool` absent from `candidate` are ignored,
/// and an empty candidate is always formable.
#[must_use]
pub fn can_form(candidate: &LetterMultiset, pool: &LetterMultiset) -> bool {
    candidate
        .counts
        .iter()
        .all(|(letter, &needed)| pool.counts.get(letter).is_some_and(|&have| have >= needed))
}

/// The fixed set of letters available for one game
///
/// Keeps the letters as the player supplied them (for display) together with
/// their precomputed multiset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: String,
    multiset: LetterMultiset,
}

impl LetterPool {
    /// Build a pool from an alphabetic string
    ///
    /// # Errors
    /// Returns `LetterError` if `letters` contains anything but ASCII letters.
    pub fn new(letters: impl Into<String>) -> Result<Self, LetterError> {
        let letters = letters.into();
        let multiset = LetterMultiset::new(&letters)?;
        Ok(Self { letters, multiset })
    }

    /// The letters as originally given
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Number of letters in the pool (counting repeats)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn multiset(&self) -> &LetterMultiset {
        &self.multiset
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}
