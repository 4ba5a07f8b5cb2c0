//! Core game engine
//!
//! Letter counting, the feasibility check, the dictionary, the guess ledger,
//! the scoring rule, and the session that ties them together. No I/O happens here.

mod dictionary;
mod ledger;
mod letters;
mod scoring;
mod session;

pub use dictionary::Dictionary;
pub use ledger::GuessLedger;
pub use letters::{LetterError, LetterMultiset, LetterPool, can_form};
pub use scoring::{FULL_POOL_BONUS, score_delta};
pub use session::{GameResult, GameSession, GuessOutcome};
