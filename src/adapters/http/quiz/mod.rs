//! HTTP adapter for quiz endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ScoreRequest, ScoreResponse};
pub use handlers::QuizHandlers;
pub use routes::quiz_routes;
