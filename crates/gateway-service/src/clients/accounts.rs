//! Account service HTTP client.

use crate::clients::{build_http_client, execute, UpstreamResponse};
use crate::context::BearerToken;
use crate::errors::GatewayError;
use serde_json::Value;

/// HTTP client for the account service.
#[derive(Clone)]
pub struct AccountClient {
    client: reqwest::Client,
    base_url: String,
}

impl AccountClient {
    /// Create an account client.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be
    /// built.
    pub fn new(base_url: String) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_http_client()?,
            base_url,
        })
    }

    /// Forward a registration request. Public: no token involved.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the downstream service is unreachable.
    pub async fn register(&self, body: Value) -> Result<UpstreamResponse, GatewayError> {
        execute(
            self.client
                .post(format!("{}/api/v1/auth/register", self.base_url))
                .json(&body),
        )
        .await
    }

    /// Forward a login request. Public: no token involved.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the downstream service is unreachable.
    pub async fn login(&self, body: Value) -> Result<UpstreamResponse, GatewayError> {
        execute(
            self.client
                .post(format!("{}/api/v1/auth/login", self.base_url))
                .json(&body),
        )
        .await
    }

    /// Fetch the profile for the presented token. The token travels out
    /// exactly as extracted, re-prefixed with `Bearer `.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the downstream service is unreachable.
    pub async fn profile(&self, token: &BearerToken) -> Result<UpstreamResponse, GatewayError> {
        execute(
            self.client
                .get(format!("{}/api/v1/auth/profile", self.base_url))
                .bearer_auth(token.as_str()),
        )
        .await
    }
}
