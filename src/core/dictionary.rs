//! Dictionary of valid words
//!
//! An immutable set of uppercased words queried by exact match.

use rustc_hash::FxHashSet;

/// Read-only collection of canonicalized (uppercase) words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, uppercasing every word
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Dictionary;
    ///
    /// let dict = Dictionary::new(["list", "Ten", "SILENT"]);
    /// assert!(dict.contains("silent"));
    /// assert!(!dict.contains("sil"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_uppercase())
            .collect();
        Self { words }
    }

    /// Exact, case-insensitive lookup
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_and_case_insensitive() {
        let dict = Dictionary::new(["list", "ten"]);
        assert!(dict.contains("LIST"));
        assert!(dict.contains("list"));
        assert!(dict.contains("TeN"));
        assert!(!dict.contains("lis"));
        assert!(!dict.contains("lists"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn duplicates_collapse() {
        let dict: Dictionary = ["cat", "CAT", "Cat"].into_iter().collect();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(!dict.contains("cat"));
    }
}
