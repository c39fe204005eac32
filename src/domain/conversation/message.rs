//! Chat message entity.
//!
//! Messages are immutable records in a session's append-only log. Ids come
//! from the owning session's counter, so log order and id order agree.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Typed or transcribed by the student.
    User,
    /// Produced by the counselor, including greetings and fallback replies.
    Assistant,
}

impl Origin {
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }
}

/// An immutable message within a chat session.
///
/// # Invariants
///
/// - `id` is unique within its session and increases with creation order
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    origin: Origin,
    content: String,
    created_at: Timestamp,
}

impl ChatMessage {
    pub fn new(id: MessageId, origin: Origin, content: impl Into<String>) -> Self {
        Self {
            id,
            origin,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }

    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Origin::User, content)
    }

    pub fn assistant(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Origin::Assistant, content)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_from_user(&self) -> bool {
        self.origin.is_user()
    }
}
