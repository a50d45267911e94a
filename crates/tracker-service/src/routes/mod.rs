//! HTTP routes for the tracker service.
//!
//! Every record route is layered behind the authentication guard; only the
//! health probe is public.

use crate::handlers::{self, AppState};
use crate::middleware::{require_identity, AuthState};
use axum::{middleware, routing::get, Router};
use common::jwt::TokenVerifier;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Build the application routes.
///
/// - `/health` - liveness probe, public
/// - `/api/v1/applications` - list/create, guarded
/// - `/api/v1/applications/{id}` - get/update/delete, guarded
pub fn build_routes(state: Arc<AppState>, verifier: Arc<TokenVerifier>) -> Router {
    let auth_state = Arc::new(AuthState { verifier });

    let public_routes = Router::new().route("/health", get(health_check));

    let protected_routes = Router::new()
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
