//! Quiz domain module.
//!
//! Aptitude quiz content, additive stream scoring, and the recommendation
//! drawn from it.

mod attempt;
mod catalog;
mod engine;
mod errors;
mod recommendation;
mod stream;
mod tally;

#[cfg(test)]
mod proptests;

pub use attempt::{AttemptStep, QuizAttempt};
pub use catalog::{QuestionCatalog, Question, QuizOption, StreamDefinition};
pub use engine::{AnswerEvent, ScoringEngine};
pub use errors::{CatalogError, QuizError};
pub use recommendation::Recommendation;
pub use stream::StreamTag;
pub use tally::ScoreTally;
