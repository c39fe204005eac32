//! HTTP adapters - REST API for the chat relay and the aptitude quiz.

pub mod chat;
pub mod quiz;

mod error;
mod router;

pub use chat::{chat_routes, ChatHandlers};
pub use error::{ErrorCode, ErrorResponse};
pub use quiz::{quiz_routes, QuizHandlers};
pub use router::api_router;
