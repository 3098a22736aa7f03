//! Infrastructure layer.
//!
//! Technical concerns that support the session without containing deck
//! logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading, validation and logging setup

pub mod config;
