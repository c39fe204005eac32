//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{send_chat, suggest_prompt, transcribe_audio, ChatHandlers};

/// Creates the chat router; mount under `/api/chat`.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", post(send_chat))
        .route("/suggestion", get(suggest_prompt))
        .route("/transcribe", post(transcribe_audio))
        .with_state(handlers)
}
