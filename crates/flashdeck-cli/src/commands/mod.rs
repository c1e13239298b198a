//! One module per interactive action.

pub mod add;
pub mod ask;
pub mod export;
pub mod import;
pub mod log;
pub mod remove;
pub mod stats;

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

use flashdeck_core::DeckError;

use crate::session::Session;

/// Actions offered at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Import => "import",
            Action::Export => "export",
            Action::Ask => "ask",
            Action::Exit => "exit",
            Action::Log => "log",
            Action::HardestCard => "hardest card",
            Action::ResetStats => "reset stats",
        };
        f.write_str(name)
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Action::Add),
            "remove" => Ok(Action::Remove),
            "import" => Ok(Action::Import),
            "export" => Ok(Action::Export),
            "ask" => Ok(Action::Ask),
            "exit" => Ok(Action::Exit),
            "log" => Ok(Action::Log),
            "hardest card" => Ok(Action::HardestCard),
            "reset stats" => Ok(Action::ResetStats),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

/// Run one action. `Exit` is handled by the session loop and is a no-op here.
pub fn execute<R: BufRead, W: Write>(action: Action, session: &mut Session<R, W>) -> Result<()> {
    tracing::debug!(%action, "dispatching");
    match action {
        Action::Add => add::execute(session),
        Action::Remove => remove::execute(session),
        Action::Import => import::execute(session),
        Action::Export => export::execute(session),
        Action::Ask => ask::execute(session),
        Action::Log => log::execute(session),
        Action::HardestCard => stats::hardest(session),
        Action::ResetStats => stats::reset(session),
        Action::Exit => Ok(()),
    }
}

/// The message shown to the user for a failed request.
pub fn describe(err: &DeckError) -> String {
    match err {
        DeckError::EmptyTerm => "The term cannot be empty.".to_string(),
        DeckError::DuplicateTerm(term) => format!("The card \"{term}\" already exists."),
        DeckError::EmptyDefinition => "The definition cannot be empty.".to_string(),
        DeckError::DuplicateDefinition(definition) => {
            format!("The definition \"{definition}\" already exists.")
        }
        DeckError::NotFound(term) => format!("Can't remove \"{term}\": there is no such card."),
        DeckError::FileNotFound(_) => "File not found.".to_string(),
        DeckError::InvalidNumber { line, value } => {
            format!("Invalid mistake count \"{value}\" on line {line}; import stopped.")
        }
        DeckError::EmptyRegistry => "There are no cards to ask about.".to_string(),
        DeckError::Io { .. } => format!("Error: {err}."),
    }
}
