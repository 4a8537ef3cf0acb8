//! Error types for the judge HTTP API.
//!
//! [`ApiError`] is converted into an Axum response with a JSON body
//! `{"error": ..., "status": ...}`. A rejected submission is not an API
//! error: it is a normal `200` report with `success: false`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use judge_core::JudgeError;
use tracing::warn;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request cannot be served as asked.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JudgeError> for ApiError {
    fn from(err: JudgeError) -> Self {
        match err {
            JudgeError::UnknownInstance { .. } => Self::NotFound(err.to_string()),
            JudgeError::LevelNotConfigured { .. } => Self::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        warn!(status = status.as_u16(), error = %message, "Request rejected");

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
