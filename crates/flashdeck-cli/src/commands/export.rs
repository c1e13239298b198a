//! The `export` action and the shutdown export.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::commands::describe;
use crate::session::Session;

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(name) = session.console.prompt("File name:")? else {
        return Ok(());
    };
    to_path(session, Path::new(&name))
}

/// Export to `path` and report how many cards were saved.
pub fn to_path<R: BufRead, W: Write>(session: &mut Session<R, W>, path: &Path) -> Result<()> {
    let message = match session.registry.export_file(path) {
        Ok(count) => format!("{count} cards have been saved."),
        Err(e) => {
            if e.is_io() {
                tracing::warn!(path = %path.display(), "export failed: {e}");
            } else {
                tracing::debug!(path = %path.display(), "export rejected: {e}");
            }
            describe(&e)
        }
    };
    session.console.say(message)?;
    Ok(())
}
