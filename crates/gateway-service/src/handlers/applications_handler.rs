//! Application pass-through handlers.
//!
//! Every route here requires a token to be present; the downstream guard
//! does the verification. The id path segment is relayed opaquely — the
//! tracker service owns its format.

use crate::clients::UpstreamResponse;
use crate::context::BearerToken;
use crate::errors::GatewayError;
use crate::handlers::{auth_handler::AppState, parse_json};
use axum::{
    extract::{Path, State},
    Extension,
};
use std::sync::Arc;
use tracing::instrument;

/// Handler for GET /api/v1/applications
#[instrument(skip_all, name = "gateway.handlers.applications.list")]
pub async fn list_applications(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<BearerToken>,
) -> Result<UpstreamResponse, GatewayError> {
    state.tracker.list(&token).await
}

/// Handler for GET /api/v1/applications/{id}
#[instrument(skip_all, name = "gateway.handlers.applications.get")]
pub async fn get_application(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<String>,
) -> Result<UpstreamResponse, GatewayError> {
    state.tracker.get(&token, &id).await
}

/// Handler for POST /api/v1/applications
#[instrument(skip_all, name = "gateway.handlers.applications.create")]
pub async fn create_application(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<BearerToken>,
    body: axum::body::Bytes,
) -> Result<UpstreamResponse, GatewayError> {
    let body = parse_json(&body)?;
    state.tracker.create(&token, body).await
}

/// Handler for PUT /api/v1/applications/{id}
#[instrument(skip_all, name = "gateway.handlers.applications.update")]
pub async fn update_application(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<String>,
    body: axum::body::Bytes,
) -> Result<UpstreamResponse, GatewayError> {
    let body = parse_json(&body)?;
    state.tracker.update(&token, &id, body).await
}

/// Handler for DELETE /api/v1/applications/{id}
#[instrument(skip_all, name = "gateway.handlers.applications.delete")]
pub async fn delete_application(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<String>,
) -> Result<UpstreamResponse, GatewayError> {
    state.tracker.delete(&token, &id).await
}
