//! Chat error types.

use thiserror::Error;

use crate::domain::foundation::RequestId;

/// Precondition failures of a chat send.
///
/// Service failures are not here: the session turns them into a fallback
/// reply instead of returning them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,

    #[error("a request is already in flight")]
    RequestInFlight,

    /// A resolution arrived for a request that is no longer outstanding.
    #[error("exchange {0} is not the outstanding request")]
    StaleExchange(RequestId),
}
