//! Failure statistics.

use std::collections::HashMap;
use std::fmt;

use super::card::Term;

/// Result of the hardest-card query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hardest {
    /// No card has ever been answered wrongly.
    None,
    /// One card holds the highest failure count.
    Single { term: Term, count: u32 },
    /// Several cards share the highest failure count, sorted by term.
    Tied { terms: Vec<Term>, count: u32 },
}

impl Hardest {
    /// Find the maximum failure count and every term tied at it.
    pub fn from_counts(counts: &HashMap<Term, u32>) -> Self {
        let Some(&highest) = counts.values().max() else {
            return Hardest::None;
        };

        let mut terms: Vec<Term> = counts
            .iter()
            .filter(|(_, count)| **count == highest)
            .map(|(term, _)| term.clone())
            .collect();
        terms.sort();

        if terms.len() == 1 {
            Hardest::Single {
                term: terms.remove(0),
                count: highest,
            }
        } else {
            Hardest::Tied {
                terms,
                count: highest,
            }
        }
    }
}

impl fmt::Display for Hardest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hardest::None => write!(f, "There are no cards with errors."),
            Hardest::Single { term, count } => write!(
                f,
                "The hardest card is {term}. You have {count} errors answering it."
            ),
            Hardest::Tied { terms, count } => {
                let joined = terms
                    .iter()
                    .map(Term::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "The hardest cards are {joined}. You have {count} errors answering them."
                )
            }
        }
    }
}
