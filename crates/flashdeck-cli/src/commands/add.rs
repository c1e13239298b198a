//! The `add` action.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::commands::describe;
use crate::session::Session;

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(term) = session.console.prompt("The card:")? else {
        return Ok(());
    };
    if let Err(e) = session.registry.check_term(&term) {
        session.console.say(describe(&e))?;
        return Ok(());
    }

    let Some(definition) = session.console.prompt("The definition of the card:")? else {
        return Ok(());
    };
    match session.registry.add(&term, &definition) {
        Ok(card) => {
            let message = format!("The pair {card} has been added.");
            session.console.say(message)?;
        }
        Err(e) => session.console.say(describe(&e))?,
    }

    Ok(())
}
