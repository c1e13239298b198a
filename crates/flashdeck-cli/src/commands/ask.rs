//! The `ask` action: run a quiz.

use std::io::{BufRead, Write};

use anyhow::Result;

use flashdeck_core::DeckError;

use crate::commands::describe;
use crate::session::Session;

pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(reply) = session.console.prompt("How many times to ask?")? else {
        return Ok(());
    };
    let Ok(count) = reply.parse::<usize>() else {
        session
            .console
            .say("Please enter a non-negative number.")?;
        return Ok(());
    };

    let Session {
        registry,
        console,
        rng,
        ..
    } = session;

    match registry.run_quiz(count, rng, console) {
        Ok(_) => Ok(()),
        // Input closed mid-quiz; the session loop will notice and exit.
        Err(e) if e.is_io() && console.is_exhausted() => Ok(()),
        Err(e @ DeckError::EmptyRegistry) => {
            console.say(describe(&e))?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
