//! Domain errors for deck operations.
//!
//! These errors describe recoverable conditions: the session reports them
//! to the user and carries on.
//!
//! # Examples
//!
//! ```
//! use flashcards::domain::{Deck, DomainError, Term};
//!
//! let mut deck = Deck::new();
//! deck.insert(Term::quoted("cat"), "feline");
//!
//! let result = deck.check_definition("feline");
//! assert!(matches!(result, Err(DomainError::DuplicateDefinition { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when a deck invariant would be violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A term already exists, compared case-insensitively.
    #[error("The term {existing} already exists.")]
    DuplicateTerm {
        /// The stored term that collided.
        existing: String,
    },

    /// A definition already exists, compared exactly.
    #[error("The definition \"{existing}\" already exists.")]
    DuplicateDefinition {
        /// The stored definition that collided.
        existing: String,
    },

    /// A card file line has no `": "` separator.
    #[error("missing \": \" separator in line {line:?}")]
    MalformedLine {
        /// The offending line.
        line: String,
    },
}
