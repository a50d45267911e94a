//! Tracker service error types.
//!
//! Same policy as the rest of the system: generic client-facing messages,
//! precise causes logged server-side, and one uniform `INVALID_TOKEN`
//! response for every flavor of verification failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::jwt::TokenError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    InvalidToken(TokenError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error")]
    Internal,
}

impl From<TokenError> for TrackerError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing => TrackerError::Internal,
            verification_failure => TrackerError::InvalidToken(verification_failure),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            TrackerError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", reason.clone())
            }
            TrackerError::InvalidToken(err) => {
                (StatusCode::UNAUTHORIZED, "INVALID_TOKEN", err.to_string())
            }
            TrackerError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", resource.clone())
            }
            TrackerError::Storage(err) => {
                tracing::error!(target: "tracker.storage", error = %err, "Storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "An internal storage error occurred".to_string(),
                )
            }
            TrackerError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}
