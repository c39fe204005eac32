//! Chat session status machine.
//!
//! Three states. `Errored` behaves like `Idle` for new input; it only differs
//! by the error marker the session keeps next to it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RequestId, StateMachine, Timestamp};

/// Where a chat session is in its request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    /// No request outstanding.
    #[default]
    Idle,

    /// Exactly one completion request outstanding.
    AwaitingResponse,

    /// The last request failed. New input is still accepted.
    Errored,
}

impl ChatStatus {
    /// Returns true if a new message may be sent.
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::AwaitingResponse)
    }

    pub fn is_awaiting_response(&self) -> bool {
        matches!(self, Self::AwaitingResponse)
    }
}

impl StateMachine for ChatStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ChatStatus::*;
        matches!(
            (self, target),
            // Send
            (Idle, AwaitingResponse) |
            (Errored, AwaitingResponse) |
            // Resolution
            (AwaitingResponse, Idle) |
            (AwaitingResponse, Errored)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ChatStatus::*;
        match self {
            Idle => vec![AwaitingResponse],
            AwaitingResponse => vec![Idle, Errored],
            Errored => vec![AwaitingResponse],
        }
    }
}

/// Diagnostic attached to a session whose last request failed.
///
/// Never shown in the message log; the log only gets the fallback reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMarker {
    pub request_id: RequestId,
    pub reason: String,
    pub at: Timestamp,
}

impl ErrorMarker {
    pub fn new(request_id: RequestId, reason: impl Into<String>) -> Self {
        Self {
            request_id,
            reason: reason.into(),
            at: Timestamp::now(),
        }
    }
}
