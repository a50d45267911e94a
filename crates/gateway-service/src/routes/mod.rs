//! HTTP routes for the gateway.
//!
//! Public routes (register, login, health) forward or answer without any
//! token. Identity-requiring routes are layered behind `require_bearer`,
//! which checks token PRESENCE only — verification belongs to the
//! downstream guards — and rejects before any downstream call when the
//! token is absent.

use crate::context::require_bearer;
use crate::handlers::{self, AppState};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Build the application routes.
///
/// - `/health` - liveness probe, public
/// - `/api/v1/auth/register`, `/api/v1/auth/login` - public pass-throughs
/// - `/api/v1/me` - token required, forwarded to the account service
/// - `/api/v1/applications[...]` - token required, forwarded to the tracker
/// - `/api/v1/overview` - token required, fans out to both services
pub fn build_routes(state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/auth/register", post(handlers::register))
        .route("/api/v1/auth/login", post(handlers::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/v1/me", get(handlers::me))
        .route("/api/v1/overview", get(handlers::overview))
        .route(
            "/api/v1/applications",
            get(handlers::list_applications).post(handlers::create_application),
        )
        .route(
            "/api/v1/applications/:id",
            get(handlers::get_application)
                .put(handlers::update_application)
                .delete(handlers::delete_application),
        )
        .route_layer(middleware::from_fn(require_bearer))
        .with_state(state);

    public_routes
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}

async fn health_check() -> &'static str {
    "OK"
}
