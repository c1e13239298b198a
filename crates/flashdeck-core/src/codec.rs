//! The `term:definition:mistakes` line format.
//!
//! A line is split on `:` into at most three fields, so everything after the
//! second colon belongs to the mistake count. Lines that do not yield exactly
//! three fields are skipped; a third field that is not a non-negative integer
//! aborts the import.

use crate::card::Card;
use crate::error::{DeckError, Result};
use crate::registry::Registry;

/// Field separator.
pub const DELIMITER: char = ':';

/// Encode one card as a line (without the trailing newline).
pub fn format_line(card: &Card) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        card.term, card.definition, card.mistakes
    )
}

/// Decode one line. `line_no` is 1-based and only used for error reporting.
///
/// Returns `Ok(None)` for lines that do not have three fields.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Card>> {
    let mut parts = line.splitn(3, DELIMITER);
    let (Some(term), Some(definition), Some(count)) = (parts.next(), parts.next(), parts.next())
    else {
        return Ok(None);
    };

    let count = count.trim();
    let mistakes = count
        .parse::<u32>()
        .map_err(|_| DeckError::InvalidNumber {
            line: line_no,
            value: count.to_string(),
        })?;

    Ok(Some(
        Card::new(term.trim(), definition.trim()).with_mistakes(mistakes),
    ))
}

impl Registry {
    /// Insert or overwrite one card per well-formed line.
    ///
    /// Returns the number of lines applied. On [`DeckError::InvalidNumber`]
    /// the remaining lines are not read; lines already applied stay applied.
    pub fn import_lines<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut applied = 0;
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match parse_line(line, idx + 1)? {
                Some(card) => {
                    self.upsert(card);
                    applied += 1;
                }
                None => {
                    if !line.trim().is_empty() {
                        tracing::warn!(line = idx + 1, "skipping line without three fields");
                    }
                }
            }
        }
        Ok(applied)
    }

    /// One encoded line per card, in registry order.
    pub fn export_lines(&self) -> Vec<String> {
        self.iter().map(format_line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_basic() {
        let card = Card::new("France", "Paris").with_mistakes(3);
        assert_eq!(format_line(&card), "France:Paris:3");
    }

    #[test]
    fn parse_basic() {
        let card = parse_line("France:Paris:3", 1).unwrap().unwrap();
        assert_eq!(card, Card::new("France", "Paris").with_mistakes(3));
    }

    #[test]
    fn parse_trims_fields() {
        let card = parse_line(" France : Paris : 3 ", 1).unwrap().unwrap();
        assert_eq!(card.term, "France");
        assert_eq!(card.definition, "Paris");
        assert_eq!(card.mistakes, 3);
    }

    #[test]
    fn parse_skips_short_lines() {
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("France", 1).unwrap().is_none());
        assert!(parse_line("France:Paris", 1).unwrap().is_none());
    }

    #[test]
    fn extra_colons_land_in_the_count() {
        let err = parse_line("time:12:30:0", 4).unwrap_err();
        assert!(matches!(
            err,
            DeckError::InvalidNumber { line: 4, ref value } if value == "30:0"
        ));
    }

    #[test]
    fn parse_rejects_bad_counts() {
        for bad in ["a:b:", "a:b:x", "a:b:-1", "a:b:1.5"] {
            assert!(
                matches!(parse_line(bad, 1), Err(DeckError::InvalidNumber { .. })),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn import_counts_applied_lines() {
        let mut reg = Registry::new();
        let n = reg
            .import_lines(["France:Paris:0", "garbage", "", "Japan:Tokyo:2"])
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(reg.terms(), vec!["France", "Japan"]);
        assert_eq!(reg.get("Japan").unwrap().mistakes, 2);
    }

    #[test]
    fn import_bypasses_definition_uniqueness() {
        let mut reg = Registry::new();
        reg.add("A", "apple").unwrap();
        reg.add("B", "banana").unwrap();

        let n = reg.import_lines(["A:banana:5"]).unwrap();
        assert_eq!(n, 1);

        let a = reg.get("A").unwrap();
        assert_eq!((a.definition.as_str(), a.mistakes), ("banana", 5));
        let b = reg.get("B").unwrap();
        assert_eq!((b.definition.as_str(), b.mistakes), ("banana", 0));
        assert_eq!(reg.terms(), vec!["A", "B"]);
    }

    #[test]
    fn import_stops_at_bad_count() {
        let mut reg = Registry::new();
        let err = reg
            .import_lines(["France:Paris:1", "Japan:Tokyo:lots", "Peru:Lima:0"])
            .unwrap_err();
        assert!(matches!(err, DeckError::InvalidNumber { line: 2, .. }));
        assert_eq!(reg.terms(), vec!["France"]);
    }

    #[test]
    fn export_then_import_reproduces_registry() {
        let mut reg = Registry::new();
        reg.add("France", "Paris").unwrap();
        reg.add("Japan", "Tokyo").unwrap();
        reg.add("to be", "sein").unwrap();
        reg.record_mistake("Japan").unwrap();
        reg.record_mistake("Japan").unwrap();

        let lines = reg.export_lines();
        assert_eq!(lines, vec!["France:Paris:0", "Japan:Tokyo:2", "to be:sein:0"]);

        let mut copy = Registry::new();
        assert_eq!(copy.import_lines(&lines).unwrap(), 3);
        assert_eq!(
            copy.iter().collect::<Vec<_>>(),
            reg.iter().collect::<Vec<_>>()
        );
    }
}
