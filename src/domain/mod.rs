//! Deck domain logic: cards, failure statistics and the transcript.

mod card;
mod deck;
mod error;
mod stats;
mod transcript;

pub use card::Term;
pub use deck::{Deck, Verdict, CARD_SEPARATOR};
pub use error::DomainError;
pub use stats::Hardest;
pub use transcript::Transcript;
