//! Roster and stat-code snapshot shared by every extraction.

use std::collections::{BTreeSet, HashSet};

/// Immutable snapshot of the known player names and valid stat codes.
///
/// Names are stored lowercase, codes uppercase. Build it once from the stats
/// provider and share it behind an `Arc`; rebuild it to refresh the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    names: HashSet<String>,
    stats: BTreeSet<String>,
}

impl Vocabulary {
    /// Create a vocabulary, normalizing names to lowercase and codes to uppercase.
    pub fn new<N, S>(names: N, stats: S) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
            stats: stats
                .into_iter()
                .map(|s| s.as_ref().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Whether `name` (already lowercased) is on the roster.
    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether `code` (already uppercased) is a valid stat code.
    #[inline]
    pub fn is_stat(&self, code: &str) -> bool {
        self.stats.contains(code)
    }

    /// Whether `word` (already uppercased) contains any stat code as a substring.
    pub fn mentions_stat(&self, word: &str) -> bool {
        self.stats.iter().any(|code| word.contains(code.as_str()))
    }

    /// Iterate over roster names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Iterate over stat codes in sorted order.
    pub fn stats(&self) -> impl Iterator<Item = &str> {
        self.stats.iter().map(String::as_str)
    }

    /// Number of roster names.
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Number of stat codes.
    pub fn stat_count(&self) -> usize {
        self.stats.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case() {
        let vocab = Vocabulary::new(["LeBron James"], ["pts", "Ast"]);
        assert!(vocab.contains_name("lebron james"));
        assert!(!vocab.contains_name("LeBron James"));
        assert!(vocab.is_stat("PTS"));
        assert!(vocab.is_stat("AST"));
        assert!(!vocab.is_stat("pts"));
    }

    #[test]
    fn test_mentions_stat_is_substring_match() {
        let vocab = Vocabulary::new(Vec::<String>::new(), ["PTS"]);
        assert!(vocab.mentions_stat("PTSX"));
        assert!(vocab.mentions_stat("XPTS/REB"));
        assert!(!vocab.mentions_stat("PT"));
    }

    #[test]
    fn test_empty_codes_are_dropped() {
        let vocab = Vocabulary::new(Vec::<String>::new(), ["", "REB"]);
        assert_eq!(vocab.stat_count(), 1);
        // An empty code would make every word a stat word.
        assert!(!vocab.mentions_stat("HELLO"));
    }
}
