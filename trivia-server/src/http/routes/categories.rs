//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::questions::QuestionPage;
use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, ValidId};
use crate::http::server::AppState;
use crate::models::Category;

/// Category listing, keyed by id
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// Map categories to the `{id: type}` shape the frontend expects.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// GET /categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions - questions in one category, 10 per page
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionPage>, ApiError> {
    let category = state.store.category(id).await?;
    let result = state.store.questions(Some(category.id), page).await?;

    if result.items.is_empty() {
        return Err(ApiError::NotFound {
            resource: "category questions page",
            id: format!("{}/{}", category.id, page.page),
        });
    }

    Ok(Json(QuestionPage {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: Some(category.id),
        categories: None,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_keys_by_id() {
        let map = category_map(vec![Category::new(2, "Art"), Category::new(1, "Science")]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "1": "Science", "2": "Art" }));
    }
}
