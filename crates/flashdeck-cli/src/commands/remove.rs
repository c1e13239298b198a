//! The `remove` action.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::commands::describe;
use crate::session::Session;

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(term) = session.console.prompt("Which card?")? else {
        return Ok(());
    };

    let message = match session.registry.remove(&term) {
        Ok(_) => "The card has been removed.".to_string(),
        Err(e) => describe(&e),
    };
    session.console.say(message)?;
    Ok(())
}
