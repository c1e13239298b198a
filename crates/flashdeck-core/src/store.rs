//! Reading and writing card files.
//!
//! Each call opens its file, consumes or produces all of it, and drops the
//! handle before returning, whether or not the operation succeeded.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::format_line;
use crate::error::{DeckError, Result};
use crate::registry::Registry;

impl Registry {
    /// Import cards from a `term:definition:mistakes` file.
    ///
    /// Fails with [`DeckError::FileNotFound`] if `path` does not exist.
    pub fn import_file(&mut self, path: &Path) -> Result<usize> {
        if !path.exists() {
            return Err(DeckError::FileNotFound(path.to_path_buf()));
        }

        let lines = read_lines(path)?;
        let count = self.import_lines(&lines)?;
        tracing::debug!(path = %path.display(), count, "cards imported");
        Ok(count)
    }

    /// Write every card to `path`, truncating whatever was there.
    pub fn export_file(&self, path: &Path) -> Result<usize> {
        let file = File::create(path)
            .map_err(|e| DeckError::io(format!("failed to create {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);

        let mut count = 0;
        for card in self.iter() {
            writeln!(writer, "{}", format_line(card))
                .map_err(|e| DeckError::io(format!("failed to write {}", path.display()), e))?;
            count += 1;
        }
        writer
            .flush()
            .map_err(|e| DeckError::io(format!("failed to write {}", path.display()), e))?;

        tracing::debug!(path = %path.display(), count, "cards exported");
        Ok(count)
    }
}

/// Read every line, replacing invalid UTF-8 rather than failing the file.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| DeckError::io(format!("failed to open {}", path.display()), e))?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| DeckError::io(format!("failed to read {}", path.display()), e))?;
        if read == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}
