//! HTTP routes for quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_catalog, score_quiz, QuizHandlers};

/// Creates the quiz router; mount under `/api/quiz`.
pub fn quiz_routes(handlers: QuizHandlers) -> Router {
    Router::new()
        .route("/", get(get_catalog))
        .route("/score", post(score_quiz))
        .with_state(handlers)
}
