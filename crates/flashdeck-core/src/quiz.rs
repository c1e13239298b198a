//! Quiz engine.
//!
//! A quiz shuffles the current terms once, then walks that permutation with
//! wraparound until the requested number of questions has been asked. Wrong
//! answers bump the asked card's mistake count; nothing else in the registry
//! changes.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{DeckError, Result};
use crate::registry::Registry;

/// Supplies answers during a quiz.
pub trait AnswerSource {
    /// Present `term` and return the answer given for it.
    fn answer(&mut self, term: &str) -> Result<String>;

    /// Called after each answer has been graded.
    fn on_outcome(&mut self, _term: &str, _outcome: &Outcome) -> Result<()> {
        Ok(())
    }
}

/// Result of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    /// The answer is the definition of another card.
    WrongButMatchesOther {
        correct: String,
        other_term: String,
    },
    WrongNoMatch {
        correct: String,
    },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "Correct!"),
            Outcome::WrongButMatchesOther {
                correct,
                other_term,
            } => write!(
                f,
                "Wrong. The right answer is \"{correct}\", but your definition is correct for \"{other_term}\"."
            ),
            Outcome::WrongNoMatch { correct } => {
                write!(f, "Wrong. The right answer is \"{correct}\".")
            }
        }
    }
}

/// One asked question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRecord {
    pub term: String,
    pub answer: String,
    pub outcome: Outcome,
}

/// A fixed order of terms, reused lap after lap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOrder {
    terms: Vec<String>,
}

impl QuizOrder {
    /// Use `terms` as-is.
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    /// A single random permutation of the registry's terms.
    pub fn shuffled<R: Rng + ?Sized>(registry: &Registry, rng: &mut R) -> Self {
        let mut terms = registry.terms();
        terms.shuffle(rng);
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term asked at question `index` (0-based). `None` only when empty.
    pub fn term_at(&self, index: usize) -> Option<&str> {
        if self.terms.is_empty() {
            return None;
        }
        Some(&self.terms[index % self.terms.len()])
    }

    /// The first `count` terms asked.
    pub fn take(&self, count: usize) -> impl Iterator<Item = &str> {
        (0..count).filter_map(move |i| self.term_at(i))
    }
}

impl Registry {
    /// Grade `answer` for `term`, recording a mistake if it is wrong.
    ///
    /// The answer is trimmed before comparison.
    pub fn grade(&mut self, term: &str, answer: &str) -> Result<Outcome> {
        let answer = answer.trim();
        let correct = self
            .get(term)
            .map(|c| c.definition.clone())
            .ok_or_else(|| DeckError::NotFound(term.to_string()))?;

        if answer == correct {
            return Ok(Outcome::Correct);
        }

        let other = self
            .iter()
            .find(|c| c.term != term && c.definition == answer)
            .map(|c| c.term.clone());
        self.record_mistake(term)?;

        Ok(match other {
            Some(other_term) => Outcome::WrongButMatchesOther {
                correct,
                other_term,
            },
            None => Outcome::WrongNoMatch { correct },
        })
    }

    /// Ask `count` questions in a freshly shuffled order.
    pub fn run_quiz<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
        source: &mut dyn AnswerSource,
    ) -> Result<Vec<QuizRecord>> {
        let order = QuizOrder::shuffled(self, rng);
        self.run_quiz_in_order(count, &order, source)
    }

    /// Ask `count` questions following `order`, wrapping around as needed.
    pub fn run_quiz_in_order(
        &mut self,
        count: usize,
        order: &QuizOrder,
        source: &mut dyn AnswerSource,
    ) -> Result<Vec<QuizRecord>> {
        if count > 0 && (self.is_empty() || order.is_empty()) {
            return Err(DeckError::EmptyRegistry);
        }

        let mut records = Vec::new();
        for term in order.take(count) {
            let answer = source.answer(term)?;
            let outcome = self.grade(term, &answer)?;
            source.on_outcome(term, &outcome)?;
            records.push(QuizRecord {
                term: term.to_string(),
                answer,
                outcome,
            });
        }

        let missed = records.iter().filter(|r| !r.outcome.is_correct()).count();
        tracing::debug!(asked = records.len(), missed, "quiz finished");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Answers from a fixed script, in order.
    struct Scripted {
        answers: std::vec::IntoIter<String>,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .into_iter(),
                asked: Vec::new(),
            }
        }
    }

    impl AnswerSource for Scripted {
        fn answer(&mut self, term: &str) -> Result<String> {
            self.asked.push(term.to_string());
            Ok(self.answers.next().unwrap_or_default())
        }
    }

    /// Always knows the right answer.
    struct Oracle(Registry);

    impl AnswerSource for Oracle {
        fn answer(&mut self, term: &str) -> Result<String> {
            Ok(self.0.get(term).unwrap().definition.clone())
        }
    }

    fn fruit() -> Registry {
        let mut reg = Registry::new();
        reg.add("A", "apple").unwrap();
        reg.add("B", "banana").unwrap();
        reg
    }

    #[test]
    fn cycles_through_fixed_permutation() {
        let mut reg = fruit();
        let order = QuizOrder::new(vec!["B".into(), "A".into()]);
        let mut source = Scripted::new(&["banana", "apple", "banana"]);

        let records = reg.run_quiz_in_order(3, &order, &mut source).unwrap();
        assert_eq!(source.asked, vec!["B", "A", "B"]);
        assert!(records.iter().all(|r| r.outcome.is_correct()));
    }

    #[test]
    fn correct_answers_leave_counts_alone() {
        let mut reg = Registry::new();
        for (t, d) in [("one", "1"), ("two", "2"), ("three", "3")] {
            reg.add(t, d).unwrap();
        }
        let mut oracle = Oracle(reg.clone());
        let mut rng = StdRng::seed_from_u64(7);

        let records = reg.run_quiz(10, &mut rng, &mut oracle).unwrap();
        assert_eq!(records.len(), 10);
        assert!(records.iter().all(|r| r.outcome == Outcome::Correct));
        assert!(reg.iter().all(|c| c.mistakes == 0));
    }

    #[test]
    fn wrong_answers_are_classified() {
        let mut reg = fruit();
        let order = QuizOrder::new(vec!["A".into(), "A".into()]);
        let mut source = Scripted::new(&["banana", "cherry"]);

        let records = reg.run_quiz_in_order(2, &order, &mut source).unwrap();
        assert_eq!(
            records[0].outcome,
            Outcome::WrongButMatchesOther {
                correct: "apple".into(),
                other_term: "B".into(),
            }
        );
        assert_eq!(
            records[1].outcome,
            Outcome::WrongNoMatch {
                correct: "apple".into()
            }
        );
        assert_eq!(reg.get("A").unwrap().mistakes, 2);
        assert_eq!(reg.get("B").unwrap().mistakes, 0);
        assert_eq!(reg.get("A").unwrap().definition, "apple");
    }

    /// Answers once, then reports closed input.
    struct AnswersOnce(Option<String>);

    impl AnswerSource for AnswersOnce {
        fn answer(&mut self, _term: &str) -> Result<String> {
            self.0.take().ok_or_else(|| {
                DeckError::io(
                    "failed to read answer",
                    std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed"),
                )
            })
        }
    }

    #[test]
    fn huge_count_asks_until_input_closes() {
        let mut reg = fruit();
        let order = QuizOrder::new(vec!["A".into(), "B".into()]);
        let mut source = AnswersOnce(Some("apple".into()));

        let err = reg
            .run_quiz_in_order(usize::MAX, &order, &mut source)
            .unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
        assert!(reg.iter().all(|c| c.mistakes == 0));
    }

    #[test]
    fn cross_match_after_import_skips_asked_card() {
        let mut reg = fruit();
        reg.import_lines(["A:banana:5"]).unwrap();
        reg.add("C", "cherry").unwrap();

        // A and B now share "banana". A cross-match reports the first
        // other card in registry order.
        assert_eq!(
            reg.grade("C", "banana").unwrap(),
            Outcome::WrongButMatchesOther {
                correct: "cherry".into(),
                other_term: "A".into(),
            }
        );

        // "banana" is right for both A and B.
        assert_eq!(reg.grade("B", "banana").unwrap(), Outcome::Correct);
        assert_eq!(reg.grade("A", "banana").unwrap(), Outcome::Correct);

        // A wrong answer for B that is A's old definition matches nobody.
        assert_eq!(
            reg.grade("B", "apple").unwrap(),
            Outcome::WrongNoMatch {
                correct: "banana".into()
            }
        );

        assert_eq!(reg.get("A").unwrap().mistakes, 5);
        assert_eq!(reg.get("B").unwrap().mistakes, 1);
        assert_eq!(reg.get("C").unwrap().mistakes, 1);
    }

    #[test]
    fn answers_are_trimmed() {
        let mut reg = fruit();
        assert_eq!(reg.grade("A", "  apple ").unwrap(), Outcome::Correct);
    }

    #[test]
    fn empty_registry() {
        let mut reg = Registry::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut source = Scripted::new(&[]);

        let err = reg.run_quiz(1, &mut rng, &mut source).unwrap_err();
        assert!(matches!(err, DeckError::EmptyRegistry));
        assert!(reg.run_quiz(0, &mut rng, &mut source).unwrap().is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut reg = Registry::new();
        for i in 0..20 {
            reg.add(&format!("t{i}"), &format!("d{i}")).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(42);
        let order = QuizOrder::shuffled(&reg, &mut rng);

        let mut seen: Vec<&str> = order.take(20).collect();
        seen.sort();
        let mut expected = reg.terms();
        expected.sort();
        assert_eq!(seen, expected);
        assert_eq!(order.term_at(3), order.term_at(23));
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::Correct.to_string(), "Correct!");
        assert_eq!(
            Outcome::WrongNoMatch {
                correct: "apple".into()
            }
            .to_string(),
            "Wrong. The right answer is \"apple\"."
        );
        assert_eq!(
            Outcome::WrongButMatchesOther {
                correct: "apple".into(),
                other_term: "B".into()
            }
            .to_string(),
            "Wrong. The right answer is \"apple\", but your definition is correct for \"B\"."
        );
    }
}
