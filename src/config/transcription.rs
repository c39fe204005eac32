//! Speech-to-text configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Transcription endpoint configuration. Optional as a whole: without an
/// endpoint every transcription request fails as not configured.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionConfig {
    /// Endpoint accepting `{"audio": <base64>}` and returning `{"text": ...}`
    pub endpoint: Option<String>,

    /// Bearer token, if the endpoint requires one; redacted in `Debug`
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl TranscriptionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.as_ref().is_some_and(|e| !e.trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = self.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                return Err(ValidationError::InvalidUrl("transcription endpoint"));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
