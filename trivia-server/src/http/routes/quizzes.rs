//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::Question;
use crate::quiz::{self, QuizRequest};

/// Next quiz question; `null` once the round is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - draw the next question for a round
async fn next_question(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let filter = req.filter();
    let candidates = state
        .store
        .quiz_candidates(filter, &req.previous_questions)
        .await?;

    let question = quiz::pick(&candidates, &mut rand::thread_rng()).cloned();

    tracing::debug!(
        ?filter,
        asked = req.previous_questions.len(),
        remaining = candidates.len(),
        "Quiz draw"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
