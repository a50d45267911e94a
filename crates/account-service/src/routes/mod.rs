//! HTTP routes for the account service.
//!
//! Defines the Axum router: public registration/login endpoints and the
//! guarded profile endpoint.

use crate::handlers::{self, AppState};
use crate::middleware::{require_identity, AuthState};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use common::jwt::TokenVerifier;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Build the application routes.
///
/// - `/health` - liveness probe, public
/// - `/api/v1/auth/register` - public
/// - `/api/v1/auth/login` - public
/// - `/api/v1/auth/profile` - requires a verified token
///
/// TraceLayer for request logging and a 30 second request timeout apply to
/// everything.
pub fn build_routes(state: Arc<AppState>, verifier: Arc<TokenVerifier>) -> Router {
    let auth_state = Arc::new(AuthState { verifier });

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/auth/register", post(handlers::register))
        .route("/api/v1/auth/login", post(handlers::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/v1/auth/profile", get(handlers::profile))
        .route_layer(middleware::from_fn_with_state(auth_state, require_identity))
        .with_state(state);

    public_routes
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}

async fn health_check() -> &'static str {
    "OK"
}
