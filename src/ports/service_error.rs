//! Failure of an external request/response service.

use thiserror::Error;

/// Any completion or transcription failure.
///
/// Callers treat this as a single kind: the remedy is always to retry. The
/// variants exist for logs and for the HTTP clients' retry decisions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport failure (DNS, connect, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered, but not with the expected payload.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The service has no endpoint or credentials configured.
    #[error("service not configured: {0}")]
    NotConfigured(String),
}

impl ServiceError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured(message.into())
    }

    /// Returns true if sending the same request again may succeed.
    ///
    /// Rate limits and server-side statuses are retryable; other client
    /// errors are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::MalformedPayload(_) | Self::NotConfigured(_) => false,
        }
    }
}
