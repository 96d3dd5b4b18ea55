use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Client-facing error taxonomy. Every failure a handler can surface maps to
/// exactly one of these; degraded translation-memory persistence is not an
/// error at all (the response carries a `warning` field instead).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request payload.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The NLP inference service is unreachable, timed out, or reported a
    /// failure. Retryable from the client's point of view.
    #[error("inference service error: {0}")]
    Dependency(String),

    /// A fault inside this process (rendering, encoding).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn dependency(msg: impl Into<String>) -> Self {
        Self::Dependency(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Dependency(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Dependency(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
