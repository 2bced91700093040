//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! The search endpoint historically reports errors with an explicit
//! `"status": false` field the other endpoints omit; `SearchError` wraps
//! `ApiError` to preserve that shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Database error (500, logged; message surfaced to the caller)
    Database(DbError),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            other => Self::Database(other),
        }
    }
}

/// Error wrapper for the search endpoint's `{"status": false, "error"}` body
#[derive(Debug)]
pub struct SearchError(pub ApiError);

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        (status, Json(json!({ "status": false, "error": message }))).into_response()
    }
}

impl From<ValidationError> for SearchError {
    fn from(e: ValidationError) -> Self {
        Self(ApiError::Validation(e))
    }
}

impl From<DbError> for SearchError {
    fn from(e: DbError) -> Self {
        Self(ApiError::from(e))
    }
}
