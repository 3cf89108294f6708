//! Error types.
//!
//! Ordinary trie operations never fail: missing keys, empty prefixes and
//! empty tries all produce empty, zero or `false` results. The only
//! fallible surface is checking a trie rebuilt from outside data (for
//! example a deserialized snapshot) against its own invariants.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Errors reported when a trie fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The recorded key count disagrees with the number of terminal nodes.
    #[error("trie records {recorded} keys but contains {actual} terminal nodes")]
    CountMismatch {
        /// Key count stored alongside the tree.
        recorded: usize,
        /// Terminal nodes actually present in the tree.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_count_mismatch() {
        let err = TrieError::CountMismatch {
            recorded: 3,
            actual: 2,
        };
        assert_eq!(
            "trie records 3 keys but contains 2 terminal nodes",
            err.to_string()
        );
    }
}
