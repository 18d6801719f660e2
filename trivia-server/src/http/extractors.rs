//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams};

/// JSON body that rejects with the API envelope.
///
/// A body that parses but does not fit `T` is 422; a body that is not JSON
/// at all (wrong content type, unreadable) is 400.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(match rejection {
                JsonRejection::JsonDataError(e) => ApiError::Unprocessable {
                    reason: e.body_text(),
                },
                JsonRejection::JsonSyntaxError(e) => ApiError::Unprocessable {
                    reason: e.body_text(),
                },
                other => ApiError::BadRequest {
                    reason: other.body_text(),
                },
            }),
        }
    }
}

/// Integer id from the path; anything else is a 404, like an unmatched route
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "path",
                id: path,
            })?;

        raw.parse::<i32>().map(Self).map_err(|_| ApiError::NotFound {
            resource: "id",
            id: raw,
        })
    }
}

/// `?page=N`, defaulting to page 1 when absent or unparseable
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PaginationParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();
        Ok(Self(Pagination::from(params)))
    }
}
