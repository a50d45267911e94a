//! Authentication guard for protected routes.
//!
//! The tracker performs its own header extraction and verification; it does
//! not trust the gateway to have done either. A request reaching a record
//! handler always carries a verified [`Identity`] in its extensions, and a
//! rejected request never touches the application store.

use crate::errors::TrackerError;
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
#[instrument(skip_all, name = "tracker.middleware.auth")]
pub async fn require_identity(
    State(state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, TrackerError> {
    let header = req
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok());

    let token = parse_bearer(header).ok_or_else(|| {
        tracing::debug!(target: "tracker.middleware.auth", "Missing Authorization header");
        TrackerError::from(TokenError::MissingCredential)
    })?;

    let identity: Identity = state.verifier.verify(token)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
