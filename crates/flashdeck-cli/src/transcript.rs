//! Session transcript.
//!
//! Keeps every line shown to or typed by the user so the `log` action can
//! write the whole conversation to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Write all entries to `path`, then `trailer` if given, then a
    /// `Log saved on:` timestamp line. The transcript itself is not changed.
    pub fn save(&self, path: &Path, trailer: Option<&str>) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        for entry in self.entries.iter().map(String::as_str).chain(trailer) {
            writeln!(writer, "{entry}")?;
        }
        writeln!(
            writer,
            "Log saved on: {}",
            chrono::Local::now().format("%a %b %e %H:%M:%S %Y")
        )?;
        writer
            .flush()
            .with_context(|| format!("failed to write log file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), entries = self.entries().len(), "transcript saved");
        Ok(())
    }
}
