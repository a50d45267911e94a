//! Aggregation handler: one request fanning out to both services.

use crate::context::BearerToken;
use crate::errors::GatewayError;
use crate::handlers::auth_handler::AppState;
use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// Handler for GET /api/v1/overview (token required)
///
/// Fetches the caller's profile and application list concurrently and
/// merges them. Both downstream guards verify the same forwarded token
/// independently; if either rejects it, that rejection is relayed.
#[instrument(skip_all, name = "gateway.handlers.overview")]
pub async fn overview(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<BearerToken>,
) -> Result<Json<Value>, GatewayError> {
    let (profile, applications) = tokio::join!(
        state.accounts.profile(&token),
        state.tracker.list(&token),
    );

    let user = profile?.into_ok()?;
    let applications = applications?.into_ok()?;

    Ok(Json(json!({
        "user": user,
        "applications": applications,
    })))
}
