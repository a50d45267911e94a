//! HTTP clients for the downstream services.
//!
//! Both clients forward the caller's bearer token verbatim and relay the
//! downstream response — status and envelope — without reshaping it, so the
//! services' uniform error contract reaches the client intact.
//!
//! # Components
//!
//! - `accounts` - client for the account service
//! - `applications` - client for the tracker service

pub mod accounts;
pub mod applications;

pub use accounts::AccountClient;
pub use applications::TrackerClient;

use crate::errors::GatewayError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use std::time::Duration;

/// Timeout for downstream requests in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Connect timeout for downstream requests in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// A downstream response: status plus JSON body, relayed as-is.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamResponse {
    /// Unwrap a successful response body, or convert the downstream error
    /// envelope into a [`GatewayError::Upstream`]. Used where the gateway
    /// aggregates rather than relays.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] carrying the downstream status,
    /// code, and message when the response is not a success.
    pub fn into_ok(self) -> Result<Value, GatewayError> {
        if self.status.is_success() {
            return Ok(self.body);
        }

        let detail = self.body.get("error");
        let code = detail
            .and_then(|d| d.get("code"))
            .and_then(Value::as_str)
            .unwrap_or("UPSTREAM_ERROR")
            .to_string();
        let message = detail
            .and_then(|d| d.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Upstream request failed")
            .to_string();

        Err(GatewayError::Upstream {
            status: self.status,
            code,
            message,
        })
    }
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        // 204 must not carry a body
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }
        (self.status, Json(self.body)).into_response()
    }
}

/// Build the shared HTTP client with the gateway's timeouts.
pub(crate) fn build_http_client() -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .map_err(|e| {
            tracing::error!(target: "gateway.clients", error = %e, "Failed to build HTTP client");
            GatewayError::Internal
        })
}

/// Send a downstream request and relay the response.
pub(crate) async fn execute(
    request: reqwest::RequestBuilder,
) -> Result<UpstreamResponse, GatewayError> {
    let response = request.send().await.map_err(map_transport_error)?;

    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);

    let bytes = response.bytes().await.map_err(map_transport_error)?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    Ok(UpstreamResponse { status, body })
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_connect() || e.is_timeout() {
        tracing::warn!(target: "gateway.clients", error = %e, "Downstream unreachable");
        GatewayError::ServiceUnavailable(e.to_string())
    } else {
        tracing::error!(target: "gateway.clients", error = %e, "Downstream request failed");
        GatewayError::Internal
    }
}
