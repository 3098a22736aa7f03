//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The session talks to the filesystem through [`LineStore`], so card files
//! and transcripts can be backed by anything that stores lines.

pub mod outbound;

pub use outbound::LineStore;
