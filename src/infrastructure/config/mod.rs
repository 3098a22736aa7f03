//! Infrastructure configuration modules.

pub mod logging;
pub mod session;
pub mod settings;
