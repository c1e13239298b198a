//! The `import` action and the startup import.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::commands::describe;
use crate::session::Session;

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(name) = session.console.prompt("File name:")? else {
        return Ok(());
    };
    from_path(session, Path::new(&name))
}

/// Import `path` and report how many cards were loaded.
pub fn from_path<R: BufRead, W: Write>(session: &mut Session<R, W>, path: &Path) -> Result<()> {
    let message = match session.registry.import_file(path) {
        Ok(count) => format!("{count} cards have been loaded."),
        Err(e) => {
            if e.is_io() {
                tracing::warn!(path = %path.display(), "import failed: {e}");
            } else {
                tracing::debug!(path = %path.display(), "import rejected: {e}");
            }
            describe(&e)
        }
    };
    session.console.say(message)?;
    Ok(())
}
