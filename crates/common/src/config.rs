//! Shared authentication configuration.
//!
//! The token signing secret is a process-wide value loaded once at startup
//! and injected explicitly into the issuer and verifier constructors. Every
//! process in the deployment must load the byte-identical secret or all
//! cross-service verification fails. The secret lives in a [`SecretString`]
//! so it is redacted from `Debug` output and never logged.

use crate::jwt::{DEFAULT_CLOCK_SKEW, DEFAULT_TOKEN_TTL, MAX_CLOCK_SKEW};
use secrecy::SecretString;
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Minimum accepted signing secret length in bytes.
///
/// HS256 keys shorter than the hash output weaken the signature; 32 bytes
/// matches the SHA-256 output size.
pub const MIN_SIGNING_SECRET_BYTES: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Signing secret too short: expected at least {MIN_SIGNING_SECRET_BYTES} bytes, got {0}")]
    WeakSigningSecret(usize),

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

/// Token issuance and verification settings shared by all services.
///
/// `Debug` is derived deliberately: [`SecretString`] redacts the secret.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret, identical across all processes.
    pub signing_secret: SecretString,

    /// Lifetime of issued tokens (default 24 hours).
    pub token_ttl: Duration,

    /// Tolerance for issued-at timestamps from a skewed clock
    /// (default 5 minutes, capped at [`MAX_CLOCK_SKEW`]).
    pub clock_skew: Duration,
}

impl AuthConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `JWT_SECRET` is missing or too short, or
    /// if an override variable does not parse as seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map (for testing).
    ///
    /// Recognized variables: `JWT_SECRET` (required, >= 32 bytes),
    /// `JWT_TTL_SECONDS`, `JWT_CLOCK_SKEW_SECONDS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `JWT_SECRET` is missing or too short, or
    /// if an override variable does not parse as seconds.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let secret = vars
            .get("JWT_SECRET")
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        if secret.len() < MIN_SIGNING_SECRET_BYTES {
            return Err(ConfigError::WeakSigningSecret(secret.len()));
        }

        let token_ttl = parse_seconds(vars, "JWT_TTL_SECONDS", DEFAULT_TOKEN_TTL)?;

        // Cap the skew so misconfiguration cannot widen the acceptance window
        let clock_skew =
            parse_seconds(vars, "JWT_CLOCK_SKEW_SECONDS", DEFAULT_CLOCK_SKEW)?.min(MAX_CLOCK_SKEW);

        Ok(Self {
            signing_secret: SecretString::from(secret.clone()),
            token_ttl,
            clock_skew,
        })
    }
}

fn parse_seconds(
    vars: &HashMap<String, String>,
    var: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match vars.get(var) {
        None => Ok(default),
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                value: value.clone(),
            }),
    }
}
