//! API error types with IntoResponse
//!
//! Every failure renders the same envelope:
//! `{"success": false, "error": <status code>, "message": <short text>}`.
//! Details stay in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be read at all (400)
    BadRequest { reason: String },

    /// Resource missing or result page empty (404)
    NotFound { resource: &'static str, id: String },

    /// Path exists but not for this method (405)
    MethodNotAllowed,

    /// Well-formed request that could not be carried out (422)
    Unprocessable { reason: String },

    /// Input failed domain validation (422)
    Validation(ValidationError),

    /// Store failure outside a mutation (500, logged)
    Store(StoreError),
}

impl ApiError {
    /// Map a store error from a write or search path.
    ///
    /// Missing records stay 404; anything else the store rejects is 422.
    pub fn unprocessable_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Unprocessable {
                reason: other.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } | Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::warn!("Bad request: {}", reason),
            Self::NotFound { resource, id } => tracing::debug!("{} '{}' not found", resource, id),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::warn!("Unprocessable: {}", reason),
            Self::Validation(e) => tracing::warn!("Validation failed: {}", e),
            Self::Store(e) => tracing::error!("Store error: {}", e),
        }

        let status = self.status();
        let message = match status {
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
            _ => "internal server error",
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Store(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let (status, body) = body_of(ApiError::NotFound {
            resource: "question",
            id: "999".into(),
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "error": 404, "message": "resource not found" })
        );
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let (status, body) =
            body_of(ApiError::Validation(ValidationError::Empty { field: "answer" })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "unprocessable");
    }

    #[tokio::test]
    async fn store_error_hides_details() {
        let (status, body) = body_of(ApiError::Store(StoreError::Sqlx(
            sqlx::Error::PoolTimedOut,
        )))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "success": false, "error": 500, "message": "internal server error" })
        );
    }

    #[test]
    fn mutation_failures_are_unprocessable() {
        let err = ApiError::unprocessable_store(StoreError::Constraint("fk".into()));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = ApiError::unprocessable_store(StoreError::not_found("question", 1));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::not_found("category", 7));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(StoreError::Constraint("fk".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
