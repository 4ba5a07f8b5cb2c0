//! Word lists for the dictionary
//!
//! Loads dictionaries from files, or uses the list embedded at build time.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
