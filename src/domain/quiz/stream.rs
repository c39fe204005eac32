//! Stream tags identify the educational tracks a quiz recommends toward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Identifier of a stream (e.g. `science`, `commerce`).
///
/// Tags are lowercase ASCII words; `-` and `_` are allowed as separators.
/// The set of tags a quiz may use is closed by its [`QuestionCatalog`].
///
/// [`QuestionCatalog`]: super::QuestionCatalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StreamTag(String);

impl StreamTag {
    /// Creates a tag, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the tag is blank
    /// - `InvalidFormat` if it contains anything other than lowercase
    ///   letters, digits, `-` or `_`
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ValidationError::empty_field("stream"));
        }
        let well_formed = tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !well_formed {
            return Err(ValidationError::invalid_format(
                "stream",
                format!("'{}' must be lowercase letters, digits, '-' or '_'", tag),
            ));
        }
        Ok(Self(tag.to_string()))
    }

    pub fn science() -> Self {
        Self("science".to_string())
    }

    pub fn commerce() -> Self {
        Self("commerce".to_string())
    }

    pub fn arts() -> Self {
        Self("arts".to_string())
    }

    pub fn vocational() -> Self {
        Self("vocational".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StreamTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StreamTag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StreamTag> for String {
    fn from(tag: StreamTag) -> Self {
        tag.0
    }
}
