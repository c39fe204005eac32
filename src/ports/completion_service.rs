//! Completion Service Port - Interface for the remote language model.
//!
//! The session hands over the topic, the new message and recent history; the
//! adapter decides how to turn that into a provider request (system prompt,
//! model parameters) and returns a single text reply.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::conversation::{ChatMessage, Origin};

/// Port for text completion.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Generates the assistant reply for one user message.
    ///
    /// # Errors
    ///
    /// Any failure (transport, status, payload) is a `ServiceError`.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, ServiceError>;
}

/// One completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Stream or subject the counselor specialises in.
    pub topic: String,
    /// The new user message, already trimmed.
    pub message: String,
    /// Earlier messages, oldest first. Excludes `message`.
    pub history: Vec<HistoryEntry>,
}

impl CompletionRequest {
    pub fn new(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            message: message.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }
}

/// A prior message as the completion service sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub origin: Origin,
    pub content: String,
}

impl HistoryEntry {
    pub fn new(origin: Origin, content: impl Into<String>) -> Self {
        Self {
            origin,
            content: content.into(),
        }
    }
}

impl From<&ChatMessage> for HistoryEntry {
    fn from(message: &ChatMessage) -> Self {
        Self::new(message.origin(), message.content())
    }
}

/// The generated reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReply {
    pub content: String,
}

impl CompletionReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
