//! The ordered card registry.
//!
//! Cards are kept in insertion order, which is also the order used for
//! export and for cross-match lookups during a quiz. Terms are unique, and
//! definitions are unique for cards created through [`Registry::add`].
//! Bulk import overwrites in place and does not check definitions.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::card::Card;
use crate::error::{DeckError, Result};

/// An ordered collection of cards keyed by term.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    cards: IndexMap<String, Card>,
}

/// The highest mistake count in a registry and the terms that reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hardest {
    /// Maximum mistake count across all cards (0 when empty).
    pub mistakes: u32,
    /// Terms at the maximum, in registry order. Empty when `mistakes == 0`.
    pub terms: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Terms in insertion order.
    pub fn terms(&self) -> Vec<String> {
        self.cards.keys().cloned().collect()
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.get(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    /// First card, in registry order, whose definition equals `definition`.
    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.iter().find(|c| c.definition == definition)
    }

    /// Check that `term` could be added. Lets a caller reject a term before
    /// asking for its definition.
    pub fn check_term(&self, term: &str) -> Result<()> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DeckError::EmptyTerm);
        }
        if self.contains(term) {
            return Err(DeckError::DuplicateTerm(term.to_string()));
        }
        Ok(())
    }

    /// Check that `definition` could be added.
    pub fn check_definition(&self, definition: &str) -> Result<()> {
        let definition = definition.trim();
        if definition.is_empty() {
            return Err(DeckError::EmptyDefinition);
        }
        if self.find_by_definition(definition).is_some() {
            return Err(DeckError::DuplicateDefinition(definition.to_string()));
        }
        Ok(())
    }

    /// Add a new card at the end of the registry.
    ///
    /// Surrounding whitespace is trimmed from both fields before checking and
    /// storing them.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<&Card> {
        self.check_term(term)?;
        self.check_definition(definition)?;

        let card = Card::new(term.trim(), definition.trim());
        tracing::debug!(term = %card.term, "card added");
        let (idx, _) = self.cards.insert_full(card.term.clone(), card);
        Ok(&self.cards[idx])
    }

    /// Remove the card with this term, keeping the order of the rest.
    pub fn remove(&mut self, term: &str) -> Result<Card> {
        let card = self
            .cards
            .shift_remove(term)
            .ok_or_else(|| DeckError::NotFound(term.to_string()))?;
        tracing::debug!(term = %card.term, "card removed");
        Ok(card)
    }

    /// Zero every card's mistake count.
    pub fn reset_stats(&mut self) {
        for card in self.cards.values_mut() {
            card.mistakes = 0;
        }
        tracing::debug!(cards = self.cards.len(), "mistake counts reset");
    }

    /// The maximum mistake count and every term that reaches it.
    pub fn hardest(&self) -> Hardest {
        let mistakes = self.iter().map(|c| c.mistakes).max().unwrap_or(0);
        let terms = if mistakes == 0 {
            Vec::new()
        } else {
            self.iter()
                .filter(|c| c.mistakes == mistakes)
                .map(|c| c.term.clone())
                .collect()
        };
        Hardest { mistakes, terms }
    }

    /// Insert `card`, or overwrite the definition and mistake count of the
    /// card with the same term. An overwritten card keeps its position.
    pub fn upsert(&mut self, card: Card) {
        match self.cards.entry(card.term.clone()) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.definition = card.definition;
                existing.mistakes = card.mistakes;
                tracing::debug!(term = %existing.term, "card overwritten");
            }
            Entry::Vacant(entry) => {
                tracing::debug!(term = %card.term, "card inserted");
                entry.insert(card);
            }
        }
    }

    /// Add one to the mistake count of `term`.
    pub fn record_mistake(&mut self, term: &str) -> Result<u32> {
        let card = self
            .cards
            .get_mut(term)
            .ok_or_else(|| DeckError::NotFound(term.to_string()))?;
        card.mistakes = card.mistakes.saturating_add(1);
        Ok(card.mistakes)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Card;
    type IntoIter = indexmap::map::Values<'a, String, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.values()
    }
}
