//! Quiz error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while scoring or stepping through a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A question or option reference is out of range.
    ///
    /// `option` is `None` when the question index itself is out of range.
    #[error("invalid index: question {question}, option {option:?}")]
    InvalidIndex {
        question: usize,
        option: Option<usize>,
    },

    /// A recommendation was requested before any answer was recorded.
    #[error("no answers recorded yet")]
    NoAnswers,

    /// The attempt was advanced without an option selected.
    #[error("no option selected for the current question")]
    NoSelection,

    /// The attempt has already moved past its last question.
    #[error("quiz attempt is already finished")]
    AttemptFinished,
}

impl QuizError {
    pub(crate) fn invalid_question(question: usize) -> Self {
        QuizError::InvalidIndex {
            question,
            option: None,
        }
    }

    pub(crate) fn invalid_option(question: usize, option: usize) -> Self {
        QuizError::InvalidIndex {
            question,
            option: Some(option),
        }
    }
}

/// Errors raised while loading a question catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}
