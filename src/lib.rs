//! Flashcards - an interactive terminal flashcard trainer.
//!
//! The trainer keeps a deck of term/definition pairs in memory, quizzes the
//! user, counts wrong answers per card and can persist the deck to a flat
//! text file.
//!
//! # Architecture
//!
//! - **`domain`** - The deck store, failure statistics and the transcript.
//!   Pure in-memory state with no I/O.
//! - **`port`** - The [`port::LineStore`] trait used for card files and logs.
//! - **`adapter`** - The `clap` command line and the filesystem line store.
//! - **`app`** - The [`app::Session`] command loop tying them together.
//! - **`infrastructure`** - TOML configuration and `tracing` setup.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use flashcards::app::{Session, SessionEnd};
//!
//! let input = Cursor::new(b"add\ncat\nfeline\nexit\n".to_vec());
//! let mut session = Session::new(input, Vec::new());
//! assert_eq!(session.run().unwrap(), SessionEnd::Exit);
//! assert_eq!(session.deck().len(), 1);
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
