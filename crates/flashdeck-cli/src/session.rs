//! The interactive session.
//!
//! A [`Session`] owns all state for one run of the trainer. Commands borrow
//! it mutably one at a time.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::rngs::StdRng;

use flashdeck_core::{AnswerSource, DeckError, Outcome, Registry};

use crate::commands::{self, Action};
use crate::transcript::Transcript;

pub const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Line-based input and output, mirrored into the transcript.
pub struct Console<R, W> {
    input: R,
    pub(crate) output: W,
    pub(crate) transcript: Transcript,
    exhausted: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
            exhausted: false,
        }
    }

    /// Print a message without recording it.
    pub fn print(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Print a message and record it.
    pub fn say(&mut self, message: impl Into<String>) -> io::Result<()> {
        let message = message.into();
        self.print(&message)?;
        self.transcript.record(message);
        Ok(())
    }

    /// Read one trimmed line without recording it. `None` at end of input.
    fn read_raw(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read one trimmed line and record it.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.read_raw()?;
        if let Some(line) = &line {
            self.transcript.record(line.clone());
        }
        Ok(line)
    }

    /// Say `prompt`, then read the reply.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Whether input has run out.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<R: BufRead, W: Write> AnswerSource for Console<R, W> {
    fn answer(&mut self, term: &str) -> flashdeck_core::Result<String> {
        let reply = self
            .prompt(&format!("Print the definition of \"{term}\":"))
            .map_err(|e| DeckError::io("failed to read answer", e))?;
        reply.ok_or_else(|| {
            DeckError::io(
                "failed to read answer",
                io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            )
        })
    }

    fn on_outcome(&mut self, _term: &str, outcome: &Outcome) -> flashdeck_core::Result<()> {
        self.say(outcome.to_string())
            .map_err(|e| DeckError::io("failed to write output", e))
    }
}

/// State for one interactive run.
pub struct Session<R, W> {
    pub(crate) registry: Registry,
    pub(crate) console: Console<R, W>,
    pub(crate) rng: StdRng,
    export_on_exit: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, rng: StdRng) -> Self {
        Self {
            registry: Registry::new(),
            console: Console::new(input, output),
            rng,
            export_on_exit: None,
        }
    }

    /// Export the registry to `path` when the session ends.
    pub fn with_export_on_exit(mut self, path: Option<PathBuf>) -> Self {
        self.export_on_exit = path;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Import `path` before the first prompt.
    pub fn import_on_start(&mut self, path: &Path) -> Result<()> {
        commands::import::from_path(self, path)
    }

    /// Run the command loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say(MENU)?;
            let Some(line) = self.console.read_raw()? else {
                tracing::debug!("input closed, exiting");
                break;
            };
            let action = line.to_lowercase();
            self.console.transcript.record(action.clone());

            match action.parse::<Action>() {
                Ok(Action::Exit) => break,
                Ok(action) => commands::execute(action, self)?,
                Err(_) => self.console.say("Unknown action. Please try again.")?,
            }
        }

        self.console.say("Bye bye!")?;
        if let Some(path) = self.export_on_exit.take() {
            commands::export::to_path(self, &path)?;
        }
        Ok(())
    }
}
