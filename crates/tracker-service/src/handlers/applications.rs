//! Application record handlers.
//!
//! Every handler here runs behind the authentication guard, so the
//! [`Identity`] extension is always present, and every store call is keyed
//! by it. A record belonging to another account is indistinguishable from a
//! record that does not exist: both are 404.

use crate::errors::TrackerError;
use crate::models::{ApplicationPayload, JobApplication};
use crate::repositories::ApplicationStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use common::types::Identity;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record storage collaborator.
    pub store: Arc<dyn ApplicationStore>,
}

fn parse_payload(body: &axum::body::Bytes) -> Result<ApplicationPayload, TrackerError> {
    let payload: ApplicationPayload = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(target: "tracker.handlers", error = %e, "Invalid request body");
        TrackerError::BadRequest("Invalid request body".to_string())
    })?;

    payload.validate().map_err(TrackerError::BadRequest)?;

    Ok(payload)
}

/// Handler for GET /api/v1/applications
#[instrument(skip_all, name = "tracker.handlers.list")]
pub async fn list_applications(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<JobApplication>>, TrackerError> {
    let applications = state.store.list_for(&identity).await?;
    Ok(Json(applications))
}

/// Handler for GET /api/v1/applications/{id}
///
/// # Response
///
/// - 200 OK with the record
/// - 404 Not Found when the record is absent or owned by another identity
#[instrument(skip_all, name = "tracker.handlers.get")]
pub async fn get_application(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobApplication>, TrackerError> {
    let application = state
        .store
        .find(&identity, id)
        .await?
        .ok_or_else(|| TrackerError::NotFound("Application not found".to_string()))?;

    Ok(Json(application))
}

/// Handler for POST /api/v1/applications
///
/// # Response
///
/// - 201 Created with the stored record
/// - 400 Bad Request for an invalid payload
#[instrument(skip_all, name = "tracker.handlers.create")]
pub async fn create_application(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<JobApplication>), TrackerError> {
    let payload = parse_payload(&body)?;

    let application = payload.into_application(identity, Utc::now());
    state.store.insert(application.clone()).await?;

    tracing::info!(
        target: "tracker.handlers",
        application_id = %application.id,
        "Application created"
    );

    Ok((StatusCode::CREATED, Json(application)))
}

/// Handler for PUT /api/v1/applications/{id}
///
/// Full update. Ownership, id, and creation time are immutable.
#[instrument(skip_all, name = "tracker.handlers.update")]
pub async fn update_application(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
    body: axum::body::Bytes,
) -> Result<Json<JobApplication>, TrackerError> {
    let payload = parse_payload(&body)?;

    let mut application = state
        .store
        .find(&identity, id)
        .await?
        .ok_or_else(|| TrackerError::NotFound("Application not found".to_string()))?;

    payload.apply_to(&mut application, Utc::now());
    state.store.save(application.clone()).await?;

    Ok(Json(application))
}

/// Handler for DELETE /api/v1/applications/{id}
///
/// # Response
///
/// - 204 No Content on success
/// - 404 Not Found when the record is absent or owned by another identity
#[instrument(skip_all, name = "tracker.handlers.delete")]
pub async fn delete_application(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, TrackerError> {
    let deleted = state.store.delete(&identity, id).await?;

    if !deleted {
        return Err(TrackerError::NotFound("Application not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
