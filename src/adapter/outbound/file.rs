//! Filesystem-backed [`LineStore`].

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::port::LineStore;

/// Stores lines in plain text files, one entry per line.
///
/// Files are opened in append mode and created with owner-only permissions
/// on Unix. Existing content is never truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLineStore;

impl FileLineStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn open_append(path: &Path) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        options.open(path)
    }
}

impl LineStore for FileLineStore {
    fn append_lines(&self, path: &Path, lines: &[String]) -> Result<usize> {
        let file = Self::open_append(path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        info!(path = %path.display(), lines = lines.len(), "lines appended");
        Ok(lines.len())
    }

    fn read_lines(&self, path: &Path) -> Result<Option<Vec<String>>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "file could not be opened");
                return Ok(None);
            }
        };

        let mut content = Vec::new();
        BufReader::new(file).read_to_end(&mut content)?;
        let lines = split_lines(&content);

        info!(path = %path.display(), lines = lines.len(), "lines read");
        Ok(Some(lines))
    }
}

/// Split file bytes into lines, dropping `\r\n`/`\n` terminators and
/// replacing invalid UTF-8.
fn split_lines(content: &[u8]) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&byte| byte == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}
