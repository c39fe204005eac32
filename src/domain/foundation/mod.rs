//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, the state machine trait and validation errors
//! used by both the quiz and conversation modules.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{MessageId, RequestId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
