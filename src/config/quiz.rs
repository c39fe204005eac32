//! Quiz content configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the question catalog comes from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuizConfig {
    /// YAML catalog to serve instead of the built-in reference quiz
    pub catalog_path: Option<PathBuf>,
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::MissingRequired("QUIZ__CATALOG_PATH"));
            }
        }
        Ok(())
    }
}
