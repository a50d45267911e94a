//! Per-request bearer extraction.
//!
//! The gateway's only authentication job is consistent parsing: read the
//! `Authorization` header once, and hand every downstream call the exact
//! token the client sent. Verification happens downstream; the gateway's
//! sole rejection is "no token at all on an operation that needs one", which
//! fails fast before any downstream request.

use crate::errors::GatewayError;
use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::IntoResponse,
};
use common::jwt::parse_bearer;

/// The extracted bearer token, carried in request extensions.
///
/// Holds the token exactly as extracted: the `Bearer ` prefix stripped if
/// present, the raw header value otherwise.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Extract the bearer token from request headers, if any.
///
/// Pure pass-through parsing; performs no verification.
#[must_use]
pub fn extract_token(headers: &HeaderMap) -> Option<BearerToken> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    parse_bearer(header).map(|token| BearerToken(token.to_string()))
}

/// Middleware for routes that require an identity.
///
/// Checks token PRESENCE only and injects [`BearerToken`] into extensions.
/// An absent token is rejected here, before any downstream call; a present
/// but invalid token travels on and is rejected by the downstream guard.
pub async fn require_bearer(
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, GatewayError> {
    let token = extract_token(req.headers()).ok_or_else(|| {
        tracing::debug!(target: "gateway.context", "Missing Authorization header");
        GatewayError::MissingCredential
    })?;

    req.extensions_mut().insert(token);

    Ok(next.run(req).await)
}
