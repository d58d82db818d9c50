//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Server-side failures are logged here and reported to the client with a
//! generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::{ConnectionError, StoreError};
use crate::http::middleware::PanicFault;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Form validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Store failure (404 for `NoRecord`, otherwise 500, logged)
    Store(StoreError),

    /// Database unreachable (503, logged)
    Unavailable(ConnectionError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    fn internal_error() -> (StatusCode, serde_json::Value) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "internal_error",
                "message": "an internal error occurred"
            }),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Store(StoreError::NoRecord) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": "snippet not found"
                }),
            ),
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                Self::internal_error()
            }
            Self::Unavailable(e) => {
                tracing::error!("Database unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "unavailable",
                        "message": "database unavailable"
                    }),
                )
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                Self::internal_error()
            }
        };

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
        Self::Store(e)
    }
}

impl From<ConnectionError> for ApiError {
    fn from(e: ConnectionError) -> Self {
        Self::Unavailable(e)
    }
}

impl From<PanicFault> for ApiError {
    fn from(fault: PanicFault) -> Self {
        Self::Internal {
            message: fault.to_string(),
        }
    }
}
