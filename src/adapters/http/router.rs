//! Top-level API router: health probe, chat and quiz endpoints, shared layers.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::warn;

use crate::config::ServerConfig;

use super::chat::{chat_routes, ChatHandlers};
use super::quiz::{quiz_routes, QuizHandlers};

/// Assembles the full API.
///
/// Routes:
/// - `GET  /health`
/// - `POST /api/chat`, `GET /api/chat/suggestion`, `POST /api/chat/transcribe`
/// - `GET  /api/quiz`, `POST /api/quiz/score`
pub fn api_router(chat: ChatHandlers, quiz: QuizHandlers, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/chat", chat_routes(chat))
        .nest("/api/quiz", quiz_routes(quiz))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins_list()))
}

async fn health() -> &'static str {
    "ok"
}

/// Any origin when none are configured; otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
