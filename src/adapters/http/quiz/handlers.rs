//! HTTP handlers for quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::adapters::http::ErrorResponse;
use crate::domain::quiz::{QuestionCatalog, QuizError, ScoringEngine};

use super::dto::{ScoreRequest, ScoreResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuizHandlers {
    catalog: Arc<QuestionCatalog>,
}

impl QuizHandlers {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/quiz - Streams and questions
pub async fn get_catalog(State(handlers): State<QuizHandlers>) -> Json<QuestionCatalog> {
    Json(handlers.catalog.as_ref().clone())
}

/// POST /api/quiz/score - Tally a batch of answers and recommend streams
pub async fn score_quiz(
    State(handlers): State<QuizHandlers>,
    Json(req): Json<ScoreRequest>,
) -> Response {
    let engine = ScoringEngine::new(&handlers.catalog);

    let recommendation = engine
        .replay(&req.answers)
        .and_then(|tally| engine.recommend(&tally));

    match recommendation {
        Ok(recommendation) => {
            let complete = engine.covers_every_question(&req.answers);
            debug!(
                answers = req.answers.len(),
                complete,
                primary = recommendation.primary().as_str(),
                "Quiz scored"
            );
            (
                StatusCode::OK,
                Json(ScoreResponse::new(recommendation, &handlers.catalog, complete)),
            )
                .into_response()
        }
        Err(err) => handle_quiz_error(err),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_quiz_error(err: QuizError) -> Response {
    let body = match err {
        QuizError::InvalidIndex { .. } => ErrorResponse::bad_request(err.to_string()),
        QuizError::NoAnswers => ErrorResponse::unprocessable(err.to_string()),
        QuizError::NoSelection | QuizError::AttemptFinished => {
            ErrorResponse::internal(err.to_string())
        }
    };
    body.into_response()
}
