//! Record of words already accepted in a session

use rustc_hash::FxHashSet;

/// Append-only, insertion-ordered list of accepted words
///
/// Words are stored uppercased. `record` does not check for duplicates; callers
/// test `already_guessed` first.
#[derive(Debug, Clone, Default)]
pub struct GuessLedger {
    order: Vec<String>,
    seen: FxHashSet<String>,
}

impl GuessLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if an equal word (ignoring case) was recorded before
    #[must_use]
    pub fn already_guessed(&self, word: &str) -> bool {
        self.seen.contains(&word.to_ascii_uppercase())
    }

    /// Append `word` to the ledger
    pub fn record(&mut self, word: &str) {
        let word = word.to_ascii_uppercase();
        debug_assert!(!self.seen.contains(&word), "{word} recorded twice");
        self.seen.insert(word.clone());
        self.order.push(word);
    }

    /// Accepted words in the order they were recorded
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
