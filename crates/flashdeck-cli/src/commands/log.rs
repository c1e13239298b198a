//! The `log` action: save the session transcript.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::session::Session;

const SAVED: &str = "The log has been saved.";

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(name) = session.console.prompt("File name:")? else {
        return Ok(());
    };

    match session.console.transcript.save(Path::new(&name), Some(SAVED)) {
        Ok(()) => session.console.say(SAVED)?,
        Err(e) => {
            tracing::warn!("log save failed: {e:#}");
            session
                .console
                .say(format!("Error writing to the file: {e:#}"))?;
        }
    }
    Ok(())
}
