//! flashdeck-core: card registry, quiz engine, and text persistence.
//!
//! Everything with invariants lives here. The CLI only prompts, prints, and
//! calls into [`Registry`].

pub mod card;
pub mod codec;
pub mod error;
pub mod quiz;
pub mod registry;
pub mod store;

pub use card::Card;
pub use error::{DeckError, Result};
pub use quiz::{AnswerSource, Outcome, QuizOrder, QuizRecord};
pub use registry::{Hardest, Registry};
