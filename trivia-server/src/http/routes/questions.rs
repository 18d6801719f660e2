//! Question endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::categories::category_map;
use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::{lenient, NewQuestion, Question, SearchTerm};

/// Create question request
#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient::int")]
    pub category: i32,
    #[serde(deserialize_with = "lenient::int")]
    pub difficulty: i32,
}

/// Search request
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// A page of questions
#[derive(Serialize)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i32, String>>,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub total_questions: i64,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub total_questions: i64,
}

/// GET /questions - list all questions, 10 per page
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionPage>, ApiError> {
    let result = state.store.questions(None, page).await?;

    if result.items.is_empty() {
        return Err(ApiError::NotFound {
            resource: "questions page",
            id: page.page.to_string(),
        });
    }

    let categories = state.store.categories().await?;

    Ok(Json(QuestionPage {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: None,
        categories: Some(category_map(categories)),
    }))
}

/// POST /questions - create a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new_question = NewQuestion::new(&req.question, &req.answer, req.category, req.difficulty)?;

    let question = state
        .store
        .create_question(new_question)
        .await
        .map_err(ApiError::unprocessable_store)?;
    let total_questions = state.store.count_questions().await?;

    tracing::info!(id = question.id, category = question.category, "Question created");

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
        total_questions,
    }))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let question = state
        .store
        .delete_question(id)
        .await
        .map_err(ApiError::unprocessable_store)?;
    let total_questions = state.store.count_questions().await?;

    tracing::info!(id = question.id, "Question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question.id,
        total_questions,
    }))
}

/// POST /questions/search - case-insensitive search on question text, all matches
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<SearchRequest>,
) -> Result<Json<QuestionPage>, ApiError> {
    let term = SearchTerm::new(&req.search_term)?;

    let questions = state
        .store
        .search_questions(&term)
        .await
        .map_err(ApiError::unprocessable_store)?;

    Ok(Json(QuestionPage {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        current_category: None,
        categories: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
