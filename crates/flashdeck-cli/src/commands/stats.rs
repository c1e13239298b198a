//! The `hardest card` and `reset stats` actions.

use std::io::{BufRead, Write};

use anyhow::Result;

use flashdeck_core::Hardest;

use crate::session::Session;

pub fn hardest<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let message = hardest_message(&session.registry.hardest());
    session.console.say(message)?;
    Ok(())
}

pub fn reset<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.registry.reset_stats();
    session.console.say("Card statistics have been reset.")?;
    Ok(())
}

fn hardest_message(hardest: &Hardest) -> String {
    let quoted: Vec<String> = hardest.terms.iter().map(|t| format!("\"{t}\"")).collect();
    match quoted.as_slice() {
        [] => "There are no cards with errors.".to_string(),
        [one] => format!(
            "The hardest card is {one}. You have {} errors answering it.",
            hardest.mistakes
        ),
        many => format!(
            "The hardest cards are {}. You have {} errors answering them.",
            many.join(", "),
            hardest.mistakes
        ),
    }
}
