//! API error types with JSON responses.
//!
//! Every failure serializes as `{"detail": "<message>"}` with the status
//! code of its class. "Not found" deliberately covers both "does not
//! exist" and "owned by someone else" so existence never leaks.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use notehub_store::AccessError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400): malformed or missing input.
    #[error("{0}")]
    BadRequest(String),

    /// Unauthorized (401): missing or invalid token.
    #[error("{0}")]
    Unauthorized(String),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),

    /// Store error; not-found rows map to 404, everything else to 500.
    #[error("storage error: {0}")]
    Store(#[from] notehub_store::StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                notehub_store::StoreError::UserNotFound(_)
                | notehub_store::StoreError::NoteNotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Validation(msg) => Self::BadRequest(msg),
            AccessError::NoteNotFound(_) => Self::NotFound("Note not found".to_string()),
            AccessError::UserNotFound(_) => Self::NotFound("User not found".to_string()),
            AccessError::Store(e) => Self::Store(e),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
