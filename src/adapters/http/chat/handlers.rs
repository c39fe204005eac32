//! HTTP handlers for chat endpoints.
//!
//! These are stateless relays: each request carries everything needed, and
//! the browser-side session keeps the log.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::warn;

use crate::adapters::http::ErrorResponse;
use crate::application::chat::{pick_suggestion, DEFAULT_HISTORY_LIMIT};
use crate::ports::{
    AudioClip, CompletionRequest, CompletionService, HistoryEntry, RandomSource, ServiceError,
    TranscriptionService,
};

use super::dto::{
    ChatRequest, ChatResponse, SuggestionResponse, TranscribeRequest, TranscribeResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    completion: Arc<dyn CompletionService>,
    transcription: Arc<dyn TranscriptionService>,
    random: Arc<dyn RandomSource>,
    history_limit: usize,
}

impl ChatHandlers {
    pub fn new(
        completion: Arc<dyn CompletionService>,
        transcription: Arc<dyn TranscriptionService>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            completion,
            transcription,
            random,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Caps how many client-supplied history turns reach the completion API.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Relay one message to the counselor
pub async fn send_chat(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let message = req.message.trim();
    if message.is_empty() {
        return ErrorResponse::bad_request("message is required").into_response();
    }
    let stream = req.stream.trim();
    if stream.is_empty() {
        return ErrorResponse::bad_request("stream is required").into_response();
    }

    let skip = req.history.len().saturating_sub(handlers.history_limit);
    let history = req
        .history
        .iter()
        .skip(skip)
        .map(|turn| HistoryEntry::new(turn.origin, turn.content.as_str()))
        .collect();
    let request = CompletionRequest::new(stream, message).with_history(history);

    match handlers.completion.complete(request).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                response: reply.content,
            }),
        )
            .into_response(),
        Err(err) => service_failure("completion", err),
    }
}

/// GET /api/chat/suggestion - A random conversation starter
pub async fn suggest_prompt(State(handlers): State<ChatHandlers>) -> Json<SuggestionResponse> {
    Json(SuggestionResponse {
        prompt: pick_suggestion(handlers.random.as_ref()).to_string(),
    })
}

/// POST /api/chat/transcribe - Speech-to-text for the chat input
pub async fn transcribe_audio(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<TranscribeRequest>,
) -> Response {
    let bytes = match STANDARD.decode(req.audio.trim()) {
        Ok(bytes) if !bytes.is_empty() => bytes,
        Ok(_) => return ErrorResponse::bad_request("audio is empty").into_response(),
        Err(_) => return ErrorResponse::bad_request("audio must be base64").into_response(),
    };
    let clip = match req.mime_type {
        Some(mime_type) => AudioClip::with_mime_type(bytes, mime_type),
        None => AudioClip::new(bytes),
    };

    match handlers.transcription.transcribe(clip).await {
        Ok(transcript) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                text: transcript.text,
            }),
        )
            .into_response(),
        Err(err) => service_failure("transcription", err),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn service_failure(service: &'static str, err: ServiceError) -> Response {
    warn!(service, error = %err, "Upstream service failed");
    ErrorResponse::internal(err.to_string()).into_response()
}
