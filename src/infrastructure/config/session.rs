//! Interactive session settings.

use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the command loop.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Cap on re-prompts after a duplicate term or definition. Unset means
    /// keep asking until the input is accepted.
    #[serde(default)]
    pub max_add_attempts: Option<u32>,
    /// Card file written on `exit` when `--export_to` is not given.
    #[serde(default)]
    pub default_export: Option<PathBuf>,
}
