use std::collections::HashMap;
use std::env;

/// Gateway configuration.
///
/// The gateway carries no signing secret: it never verifies tokens, only
/// forwards them.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_address: String,
    pub account_base_url: String,
    pub tracker_base_url: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map (for testing).
    ///
    /// Recognized variables: `BIND_ADDRESS` (default `0.0.0.0:4000`),
    /// `ACCOUNT_SERVICE_URL` (default `http://localhost:3333`),
    /// `TRACKER_SERVICE_URL` (default `http://localhost:3334`).
    #[must_use]
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0:4000".to_string());

        let account_base_url = vars
            .get("ACCOUNT_SERVICE_URL")
            .cloned()
            .unwrap_or_else(|| "http://localhost:3333".to_string());

        let tracker_base_url = vars
            .get("TRACKER_SERVICE_URL")
            .cloned()
            .unwrap_or_else(|| "http://localhost:3334".to_string());

        Self {
            bind_address,
            account_base_url: account_base_url.trim_end_matches('/').to_string(),
            tracker_base_url: tracker_base_url.trim_end_matches('/').to_string(),
        }
    }
}
