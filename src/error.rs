//! Error types for the employee API
//!
//! Provides unified HTTP error handling using thiserror.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Api Error Enum ==
/// Errors surfaced at the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Employee id not found
    #[error("Employee not found: {0}")]
    NotFound(i64),

    /// Malformed path or request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request body failed field validation
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    /// Missing or wrong credentials
    #[error("Unauthorized")]
    Unauthorized,

    /// Failure propagated from the backing store
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(format!("Employee not found: {}", id))),
            )
                .into_response(),
            ApiError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Validation(fields) => (StatusCode::BAD_REQUEST, Json(fields)).into_response(),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="employees""#)],
                Json(ErrorResponse::new("Unauthorized")),
            )
                .into_response(),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                let status = match &err {
                    StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    StoreError::Constraint(_) | StoreError::Internal(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, Json(ErrorResponse::new(err.to_string()))).into_response()
            }
        }
    }
}

// Body rejections answer with the same JSON error shape as other bad input
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound(1).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidRequest("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(BTreeMap::new()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::Unavailable("down".into()))
                .into_response()
                .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Store(StoreError::Constraint("dup".into()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }
}
