//! Card identifier types.

use std::fmt;

/// The prompt-side key of a card.
///
/// Terms typed at the prompt are trimmed and wrapped in literal quote
/// characters before they are used as keys. Terms read back from a card
/// file are taken verbatim, so a file written by this program round-trips
/// with its quotes intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term(String);

impl Term {
    /// Build a term from user input: trimmed, then quoted.
    pub fn quoted(input: &str) -> Self {
        Self(format!("\"{}\"", input.trim()))
    }

    /// Build a term from an already-formed key, unchanged.
    pub fn raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the term as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for duplicate detection on add.
    pub fn eq_ignore_case(&self, other: &Term) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
