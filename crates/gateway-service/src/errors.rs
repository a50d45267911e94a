//! Gateway error types.
//!
//! The gateway relays downstream error envelopes untouched, so whatever
//! uniform messaging the services enforce survives the hop. Its own
//! `MissingCredential` rejection deliberately renders the same envelope the
//! downstream guards produce; a client cannot tell which layer rejected it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::jwt::TokenError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// No token was presented on an operation that requires an identity.
    /// Rejected before any downstream call is made.
    #[error("{}", TokenError::MissingCredential)]
    MissingCredential,

    /// A downstream service answered with an error envelope; relay it.
    #[error("Upstream error: {code}")]
    Upstream {
        status: StatusCode,
        code: String,
        message: String,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A downstream service could not be reached.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    Internal,
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

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            GatewayError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN".to_string(),
                TokenError::MissingCredential.to_string(),
            ),
            GatewayError::Upstream {
                status,
                code,
                message,
            } => (status, code, message),
            GatewayError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), reason)
            }
            GatewayError::ServiceUnavailable(reason) => {
                tracing::warn!(target: "gateway.availability", reason = %reason, "Downstream unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE".to_string(),
                    "Service temporarily unavailable".to_string(),
                )
            }
            GatewayError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR".to_string(),
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail { code, message },
        };

        (status, Json(error_response)).into_response()
    }
}
