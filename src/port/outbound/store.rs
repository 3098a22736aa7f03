//! Persistence port for line-oriented files.

use std::path::Path;

use crate::error::Result;

/// Append-only line storage used for card files and transcripts.
pub trait LineStore {
    /// Append `lines` to the file at `path`, creating it if absent.
    /// Returns the number of lines written.
    fn append_lines(&self, path: &Path, lines: &[String]) -> Result<usize>;

    /// Read every line of the file at `path`.
    ///
    /// Returns `Ok(None)` when the file cannot be opened.
    fn read_lines(&self, path: &Path) -> Result<Option<Vec<String>>>;
}
