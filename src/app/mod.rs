//! Application layer - the session loop and its commands.

mod action;
mod session;

pub use action::{Action, UnknownAction};
pub use session::{ImportOutcome, Session, SessionEnd};
