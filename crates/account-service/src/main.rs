use account_service::config::AccountConfig;
use account_service::handlers::AppState;
use account_service::repositories::InMemoryCredentialStore;
use account_service::routes;
use common::jwt::{TokenIssuer, TokenVerifier};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting account service");

    // Load configuration (fails fast on a missing or weak signing secret)
    let config = AccountConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Configuration loaded successfully");

    let issuer = Arc::new(TokenIssuer::new(&config.auth));
    let verifier = Arc::new(TokenVerifier::new(&config.auth));

    // The persistent credential store is an external collaborator; the
    // in-memory implementation stands in for it here
    let store = Arc::new(InMemoryCredentialStore::new());

    let bind_address = config.bind_address.clone();

    let state = Arc::new(AppState {
        store,
        issuer,
        config,
    });

    let app = routes::build_routes(state, verifier);

    let addr: SocketAddr = bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Account service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
