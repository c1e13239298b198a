//! Registry and persistence error types.
//!
//! Every failure a single interactive command can run into is one of these.
//! None of them is fatal to a session: the caller reports the error and
//! carries on with the next command.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by registry, quiz, and import/export operations.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The term was blank after trimming.
    #[error("the term cannot be empty")]
    EmptyTerm,

    /// A card with this exact term already exists.
    #[error("the card \"{0}\" already exists")]
    DuplicateTerm(String),

    /// The definition was blank after trimming.
    #[error("the definition cannot be empty")]
    EmptyDefinition,

    /// Another card already uses this exact definition.
    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    /// No card with this term exists.
    #[error("there is no card \"{0}\"")]
    NotFound(String),

    /// The import source does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Reading or writing failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A mistake-count field did not parse as a non-negative integer.
    #[error("invalid mistake count {value:?} on line {line}")]
    InvalidNumber { line: usize, value: String },

    /// A quiz was requested but there are no cards.
    #[error("there are no cards to ask about")]
    EmptyRegistry,
}

impl DeckError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        DeckError::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if the failure came from the filesystem rather than
    /// from the content of the request.
    pub fn is_io(&self) -> bool {
        matches!(self, DeckError::Io { .. } | DeckError::FileNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
