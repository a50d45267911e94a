use common::jwt::TokenVerifier;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracker_service::config::TrackerConfig;
use tracker_service::handlers::AppState;
use tracker_service::repositories::InMemoryApplicationStore;
use tracker_service::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracker_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tracker service");

    // Load configuration (fails fast on a missing or weak signing secret)
    let config = TrackerConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Configuration loaded successfully");

    // This service only verifies tokens; issuance belongs to the account
    // service
    let verifier = Arc::new(TokenVerifier::new(&config.auth));

    // The persistent record store is an external collaborator; the in-memory
    // implementation stands in for it here
    let store = Arc::new(InMemoryApplicationStore::new());

    let state = Arc::new(AppState { store });

    let app = routes::build_routes(state, verifier);

    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Tracker service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
