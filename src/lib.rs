//! Unscramble
//!
//! A word game: spell dictionary words from a pool of letters, scoring one point
//! per letter plus a bonus for using the whole pool.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::core::{Dictionary, GameResult, GameSession, GuessOutcome, LetterPool};
//!
//! let pool = LetterPool::new("LISTEN").unwrap();
//! let dictionary = Dictionary::new(["LIST", "TEN", "SILENT"]);
//! let mut session = GameSession::new(pool, 3, dictionary);
//!
//! assert!(session.submit_guess("list").is_accepted());
//! assert_eq!(session.submit_guess("cat"), GuessOutcome::Unformable);
//! assert_eq!(session.finalize(), GameResult::Completed(4));
//! ```

// Core game engine
pub mod core;

// Configuration and its errors
pub mod config;
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
