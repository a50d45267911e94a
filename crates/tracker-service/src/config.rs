use common::config::{AuthConfig, ConfigError};
use std::collections::HashMap;
use std::env;

/// Tracker service configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub bind_address: String,
    pub auth: AuthConfig,
}

impl TrackerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the signing secret is missing or weak.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map (for testing).
    ///
    /// `BIND_ADDRESS` defaults to `0.0.0.0:3334`; the `JWT_*` variables are
    /// read by [`AuthConfig`] and must match the account service's values
    /// byte for byte or every verification here fails.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the signing secret is missing or weak.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0:3334".to_string());

        let auth = AuthConfig::from_vars(vars)?;

        Ok(Self { bind_address, auth })
    }
}
