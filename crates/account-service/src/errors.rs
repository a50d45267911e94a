//! Account service error types.
//!
//! All errors map to HTTP status codes via the `IntoResponse` impl. Messages
//! returned to clients are intentionally generic; the precise cause is
//! logged server-side. Every token verification failure collapses into one
//! `INVALID_TOKEN` response so the client cannot tell a missing credential
//! from a malformed, expired, or tampered one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::jwt::TokenError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    InvalidToken(TokenError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error")]
    Internal,
}

impl From<TokenError> for AccountError {
    fn from(err: TokenError) -> Self {
        match err {
            // Issuer-side failure, not a client problem
            TokenError::Signing => AccountError::Internal,
            verification_failure => AccountError::InvalidToken(verification_failure),
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

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AccountError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", reason.clone())
            }
            AccountError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid email or password".to_string(),
            ),
            AccountError::InvalidToken(err) => {
                // All verification variants display the same generic message
                (StatusCode::UNAUTHORIZED, "INVALID_TOKEN", err.to_string())
            }
            AccountError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", resource.clone())
            }
            AccountError::Storage(err) => {
                tracing::error!(target: "account.storage", error = %err, "Storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "An internal storage error occurred".to_string(),
                )
            }
            AccountError::Internal => (
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
