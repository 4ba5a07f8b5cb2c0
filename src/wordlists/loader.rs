//! Dictionary loading utilities
//!
//! Provides functions to build a `Dictionary` from a file or the embedded list.

use crate::core::Dictionary;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::info;

/// Load a dictionary from a file with one word per line
///
/// Lines are trimmed and blank lines skipped; words are uppercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let dictionary = load_from_reader(io::BufReader::new(file))?;
    info!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}

/// Read one word per line from any buffered reader
///
/// Lines that are not valid UTF-8 are decoded lossily; the replacement
/// character keeps them from ever matching a guess.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn load_from_reader<R: BufRead>(mut reader: R) -> io::Result<Dictionary> {
    let mut words = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_owned());
        }
    }
    Ok(Dictionary::new(words))
}

/// Build a dictionary from the embedded word list
#[must_use]
pub fn builtin() -> Dictionary {
    let dictionary = dictionary_from_slice(super::WORDS);
    info!(words = dictionary.len(), "built-in dictionary loaded");
    dictionary
}

/// Convert a string slice to a dictionary
///
/// # Examples
/// ```
/// use unscramble::wordlists::loader::dictionary_from_slice;
///
/// let dict = dictionary_from_slice(&["list", "ten"]);
/// assert!(dict.contains("TEN"));
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::new(slice)
}
