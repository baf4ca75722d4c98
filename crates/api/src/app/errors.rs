use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use crate::config::RuntimeEnv;

/// Errors a route handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}

/// Single translation step from handler errors to HTTP responses.
///
/// The error detail is only exposed outside production; production callers
/// get a fixed generic message. The full error is logged either way.
pub fn error_to_response(err: &ApiError, env: &RuntimeEnv) -> axum::response::Response {
    tracing::error!(error = %err, "request failed");

    let message = if env.is_production() {
        "An error occurred".to_string()
    } else {
        err.to_string()
    };

    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
