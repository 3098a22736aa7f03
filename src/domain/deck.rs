//! The deck store: cards, failure counts and the operations over them.
//!
//! Everything here is pure in-memory state. Prompting, file access and
//! transcript recording live in the session layer.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use super::card::Term;
use super::error::DomainError;
use super::stats::Hardest;

/// Separator between term and definition in a card file line.
pub const CARD_SEPARATOR: &str = ": ";

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The answer matched the asked card.
    Correct,
    /// The answer matched nothing in the deck.
    Wrong { expected: String },
    /// The answer is the definition of a different card.
    WrongButMatches { expected: String, other: Term },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct!"),
            Verdict::Wrong { expected } => write!(f, "Wrong. The answer is \"{expected}\"."),
            Verdict::WrongButMatches { expected, other } => write!(
                f,
                "Wrong. The right answer is \"{expected}\", but your definition is correct for {other}."
            ),
        }
    }
}

/// Term to definition mapping plus per-term failure counts.
///
/// Failure counts are populated lazily and are not removed together with
/// their card, so a removed term can still be reported by [`Deck::hardest`].
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: HashMap<Term, String>,
    failures: HashMap<Term, u32>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up the definition stored for a term.
    #[must_use]
    pub fn definition(&self, term: &Term) -> Option<&str> {
        self.cards.get(term).map(String::as_str)
    }

    /// Failure count recorded for a term, zero when never missed.
    #[must_use]
    pub fn failures(&self, term: &Term) -> u32 {
        self.failures.get(term).copied().unwrap_or(0)
    }

    /// Reject a term that matches an existing one case-insensitively.
    pub fn check_term(&self, term: &Term) -> Result<(), DomainError> {
        match self.cards.keys().find(|existing| existing.eq_ignore_case(term)) {
            Some(existing) => Err(DomainError::DuplicateTerm {
                existing: existing.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Reject a definition already used by any card, compared exactly.
    pub fn check_definition(&self, definition: &str) -> Result<(), DomainError> {
        match self.cards.values().find(|existing| existing.as_str() == definition) {
            Some(existing) => Err(DomainError::DuplicateDefinition {
                existing: existing.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Insert or overwrite a card.
    pub fn insert(&mut self, term: Term, definition: impl Into<String>) {
        let definition = definition.into();
        debug!(term = %term, definition = %definition, "card stored");
        self.cards.insert(term, definition);
    }

    /// Remove a card. Returns false if no such card exists.
    pub fn remove(&mut self, term: &Term) -> bool {
        let removed = self.cards.remove(term).is_some();
        debug!(term = %term, removed, "card removal");
        removed
    }

    /// Snapshot of the current terms, in the map's own order.
    #[must_use]
    pub fn snapshot_terms(&self) -> Vec<Term> {
        self.cards.keys().cloned().collect()
    }

    /// Grade an answer for `term`, recording a failure when it is wrong.
    ///
    /// When the answer belongs to several other cards, the last one met
    /// while scanning is reported.
    pub fn grade(&mut self, term: &Term, answer: &str) -> Verdict {
        let expected = self.cards.get(term).cloned().unwrap_or_default();
        if answer == expected {
            return Verdict::Correct;
        }

        let other = self
            .cards
            .iter()
            .filter(|(candidate, definition)| *candidate != term && definition.as_str() == answer)
            .map(|(candidate, _)| candidate.clone())
            .last();

        *self.failures.entry(term.clone()).or_insert(0) += 1;
        debug!(term = %term, failures = self.failures(term), "wrong answer recorded");

        match other {
            Some(other) => Verdict::WrongButMatches { expected, other },
            None => Verdict::Wrong { expected },
        }
    }

    /// Card file lines, `term: definition` with both sides trimmed.
    #[must_use]
    pub fn export_lines(&self) -> Vec<String> {
        self.cards
            .iter()
            .map(|(term, definition)| {
                format!(
                    "{}{CARD_SEPARATOR}{}",
                    term.as_str().trim(),
                    definition.trim()
                )
            })
            .collect()
    }

    /// Apply one card file line.
    ///
    /// The line is split on the first separator. If the untrimmed term is
    /// already a key its definition is overwritten as read; otherwise the
    /// card is stored under the trimmed term with a trimmed definition.
    pub fn import_line(&mut self, line: &str) -> Result<(), DomainError> {
        let (key, definition) =
            line.split_once(CARD_SEPARATOR)
                .ok_or_else(|| DomainError::MalformedLine {
                    line: line.to_string(),
                })?;

        let raw = Term::raw(key);
        if self.cards.contains_key(&raw) {
            self.insert(raw, definition);
        } else {
            self.insert(Term::raw(key.trim()), definition.trim());
        }
        Ok(())
    }

    /// The card or cards with the most recorded failures.
    #[must_use]
    pub fn hardest(&self) -> Hardest {
        Hardest::from_counts(&self.failures)
    }

    /// Forget every failure count.
    pub fn reset_stats(&mut self) {
        debug!(cleared = self.failures.len(), "failure counts reset");
        self.failures.clear();
    }
}
