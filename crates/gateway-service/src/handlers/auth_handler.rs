//! Auth pass-through handlers.
//!
//! Registration and login are public pass-throughs to the account service —
//! the only place tokens are minted. `/api/v1/me` requires a token to be
//! present (the `require_bearer` middleware enforces that before this module
//! runs) and forwards it for the account service's guard to verify.

use crate::clients::{AccountClient, TrackerClient, UpstreamResponse};
use crate::context::BearerToken;
use crate::errors::GatewayError;
use crate::handlers::parse_json;
use axum::{extract::State, Extension};
use std::sync::Arc;
use tracing::instrument;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the account service.
    pub accounts: AccountClient,

    /// Client for the tracker service.
    pub tracker: TrackerClient,
}

/// Handler for POST /api/v1/auth/register (public pass-through)
#[instrument(skip_all, name = "gateway.handlers.register")]
pub async fn register(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Result<UpstreamResponse, GatewayError> {
    let body = parse_json(&body)?;
    state.accounts.register(body).await
}

/// Handler for POST /api/v1/auth/login (public pass-through)
#[instrument(skip_all, name = "gateway.handlers.login")]
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Result<UpstreamResponse, GatewayError> {
    let body = parse_json(&body)?;
    state.accounts.login(body).await
}

/// Handler for GET /api/v1/me (token required)
#[instrument(skip_all, name = "gateway.handlers.me")]
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<BearerToken>,
) -> Result<UpstreamResponse, GatewayError> {
    state.accounts.profile(&token).await
}
