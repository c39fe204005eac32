//! Request and response bodies for quiz endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::quiz::{AnswerEvent, QuestionCatalog, Recommendation, ScoreTally, StreamTag};

/// POST /api/quiz/score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<AnswerEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub tally: ScoreTally,
    /// Every stream tied at the top score, in catalog order.
    pub recommended: Vec<StreamTag>,
    /// First of `recommended`.
    pub primary: StreamTag,
    pub primary_name: Option<String>,
    pub top_score: u64,
    pub is_tie: bool,
    /// True when every question was answered exactly once.
    pub complete: bool,
}

impl ScoreResponse {
    pub fn new(recommendation: Recommendation, catalog: &QuestionCatalog, complete: bool) -> Self {
        let primary = recommendation.primary().clone();
        Self {
            primary_name: catalog.display_name(&primary).map(str::to_string),
            recommended: recommendation.leaders().to_vec(),
            top_score: recommendation.top_score(),
            is_tie: recommendation.is_tie(),
            tally: recommendation.tally().clone(),
            primary,
            complete,
        }
    }
}
