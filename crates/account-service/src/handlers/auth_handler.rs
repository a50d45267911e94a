//! Handlers for registration, login, and profile.
//!
//! Request bodies are deserialized manually from raw bytes so malformed
//! JSON returns 400 rather than Axum's default 422.

use crate::config::AccountConfig;
use crate::errors::AccountError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::repositories::CredentialStore;
use crate::services::{registration, session};
use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};
use common::jwt::TokenIssuer;
use common::types::Identity;
use std::sync::Arc;
use tracing::instrument;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Credential storage collaborator.
    pub store: Arc<dyn CredentialStore>,

    /// Token issuer (the only one in the system).
    pub issuer: Arc<TokenIssuer>,

    /// Service configuration.
    pub config: AccountConfig,
}

/// Handler for POST /api/v1/auth/register
///
/// # Response
///
/// - 201 Created with token + profile on success
/// - 400 Bad Request for invalid input or duplicate email
#[instrument(skip_all, name = "account.handlers.register")]
pub async fn register(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<AuthResponse>), AccountError> {
    let request: RegisterRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(target: "account.handlers", error = %e, "Invalid request body");
        AccountError::BadRequest("Invalid request body".to_string())
    })?;

    let response =
        registration::register_user(state.store.as_ref(), &state.issuer, &state.config, request)
            .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST /api/v1/auth/login
///
/// # Response
///
/// - 200 OK with token + profile on success
/// - 401 Unauthorized with one fixed message for unknown email and wrong
///   password alike
#[instrument(skip_all, name = "account.handlers.login")]
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Result<Json<AuthResponse>, AccountError> {
    let request: LoginRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(target: "account.handlers", error = %e, "Invalid request body");
        AccountError::BadRequest("Invalid request body".to_string())
    })?;

    let response =
        session::login_user(state.store.as_ref(), &state.issuer, &state.config, request).await?;

    Ok(Json(response))
}

/// Handler for GET /api/v1/auth/profile
///
/// Guarded route: the identity arrives in extensions, put there by the
/// authentication middleware.
///
/// # Response
///
/// - 200 OK with the public profile
/// - 404 Not Found if the record no longer exists
#[instrument(skip_all, name = "account.handlers.profile")]
pub async fn profile(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<UserProfile>, AccountError> {
    let record = state
        .store
        .find_by_id(&identity)
        .await?
        .ok_or_else(|| AccountError::NotFound("User not found".to_string()))?;

    Ok(Json(UserProfile::from(&record)))
}
