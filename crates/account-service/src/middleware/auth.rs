//! Authentication guard for protected routes.
//!
//! Extracts the bearer token from the `Authorization` header, verifies it,
//! and injects the recovered [`Identity`] into request extensions. A request
//! that fails any step is rejected before the handler runs; no protected
//! handler ever executes without a verified identity in its extensions.

use crate::errors::AccountError;
use common::jwt::{parse_bearer, TokenError, TokenVerifier};
use common::types::Identity;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::instrument;

/// State for the authentication guard.
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<TokenVerifier>,
}

/// Guard middleware: verify the bearer token and attach the identity.
///
/// # Response
///
/// - 401 with the uniform `INVALID_TOKEN` envelope when the token is
///   missing, malformed, expired, or wrongly signed
/// - continues to the handler with [`Identity`] in extensions otherwise
#[instrument(skip_all, name = "account.middleware.auth")]
pub async fn require_identity(
    State(state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, AccountError> {
    let header = req
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok());

    let token = parse_bearer(header).ok_or_else(|| {
        tracing::debug!(target: "account.middleware.auth", "Missing Authorization header");
        AccountError::from(TokenError::MissingCredential)
    })?;

    let identity: Identity = state.verifier.verify(token)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
