use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::normalize::NormalizeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, ApiError>`.
///
/// Every variant renders as `{"success": false, "error": "..."}`; failures are
/// reported in the body, not as bare protocol errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    EmptyInput(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    Provider(#[from] LlmError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::InvalidBody(err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidBody(msg) => {
                tracing::warn!("Rejected request body: {msg}");
                StatusCode::BAD_REQUEST
            }
            ApiError::Provider(e) => {
                tracing::error!("LLM error: {e}");
                StatusCode::OK
            }
            ApiError::EmptyInput(_) | ApiError::Normalize(_) => StatusCode::OK,
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
