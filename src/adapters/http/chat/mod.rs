//! HTTP adapter for chat endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatRequest, ChatResponse, HistoryTurn, SuggestionResponse, TranscribeRequest,
    TranscribeResponse,
};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
