//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status
//! code. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notekeeper_core::{FieldViolation, MSG_NOTE_NOT_FOUND, ViolationLocation};
use notekeeper_service::ServiceError;
use notekeeper_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON: `{"error": "message"}`, plus `"errors": [...]` for
/// validation failures.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client — no error detail leakage.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — input rejected by a field schema.
    Validation(Vec<FieldViolation>),
    /// 404 Not Found — requested resource doesn't exist.
    NotFound(String),
    /// 500 Internal Server Error — unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
    /// 503 Service Unavailable — pool exhausted or backend not configured.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({"error": "validation failed", "errors": violations}),
            ),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({"error": msg})),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({"error": "internal server error"}),
                )
            },
            Self::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, serde_json::json!({"error": msg}))
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => Self::Validation(errors.violations),
            ServiceError::NotFound { .. } | ServiceError::Storage(StorageError::NotFound { .. }) => {
                Self::NotFound(MSG_NOTE_NOT_FOUND.to_owned())
            },
            ref e if e.is_unavailable() => {
                tracing::warn!(error = %e, "no database connection available");
                Self::ServiceUnavailable("database is busy, try again later".to_owned())
            },
            ServiceError::NotConfigured(msg) => Self::ServiceUnavailable(msg),
            _ => Self::Internal(err.into()),
        }
    }
}

/// A body that axum could not parse as JSON is a validation failure like any other.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![FieldViolation::new(
            "body",
            ViolationLocation::Body,
            rejection.body_text(),
        )])
    }
}
