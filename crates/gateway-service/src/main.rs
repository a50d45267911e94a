use gateway_service::clients::{AccountClient, TrackerClient};
use gateway_service::config::GatewayConfig;
use gateway_service::handlers::AppState;
use gateway_service::routes;
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
                .unwrap_or_else(|_| "gateway_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting gateway service");

    let config = GatewayConfig::from_env();

    let accounts = AccountClient::new(config.account_base_url.clone())
        .map_err(|e| format!("Failed to build account client: {e}"))?;
    let tracker = TrackerClient::new(config.tracker_base_url.clone())
        .map_err(|e| format!("Failed to build tracker client: {e}"))?;

    let state = Arc::new(AppState { accounts, tracker });

    let app = routes::build_routes(state);

    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
