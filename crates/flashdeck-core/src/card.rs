//! The flashcard data type.

use std::fmt;

/// A term, the definition expected for it, and how often it was missed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The prompt shown during a quiz. Unique within a registry.
    pub term: String,
    /// The expected answer.
    pub definition: String,
    /// Number of wrong answers given for this card.
    pub mistakes: u32,
}

impl Card {
    /// Create a card with no recorded mistakes.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    /// Set the mistake count.
    pub fn with_mistakes(mut self, mistakes: u32) -> Self {
        self.mistakes = mistakes;
        self
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\":\"{}\")", self.term, self.definition)
    }
}
