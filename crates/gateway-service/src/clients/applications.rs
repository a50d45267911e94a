//! Tracker service HTTP client.

use crate::clients::{build_http_client, execute, UpstreamResponse};
use crate::context::BearerToken;
use crate::errors::GatewayError;
use serde_json::Value;

/// HTTP client for the tracker service.
///
/// Every method takes the caller's [`BearerToken`] and attaches it to the
/// downstream request; the gateway holds no credentials of its own.
#[derive(Clone)]
pub struct TrackerClient {
    client: reqwest::Client,
    base_url: String,
}

impl TrackerClient {
    /// Create a tracker client.
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

    /// List the caller's applications.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the downstream service is unreachable.
    pub async fn list(&self, token: &BearerToken) -> Result<UpstreamResponse, GatewayError> {
        execute(
            self.client
                .get(format!("{}/api/v1/applications", self.base_url))
                .bearer_auth(token.as_str()),
        )
        .await
    }

    /// Fetch one application.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the downstream service is unreachable.
    pub async fn get(
        &self,
        token: &BearerToken,
        id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        execute(
            self.client
                .get(format!("{}/api/v1/applications/{id}", self.base_url))
                .bearer_auth(token.as_str()),
        )
        .await
    }

    /// Create an application.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the downstream service is unreachable.
    pub async fn create(
        &self,
        token: &BearerToken,
        body: Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        execute(
            self.client
                .post(format!("{}/api/v1/applications", self.base_url))
                .bearer_auth(token.as_str())
                .json(&body),
        )
        .await
    }

    /// Update an application.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the downstream service is unreachable.
    pub async fn update(
        &self,
        token: &BearerToken,
        id: &str,
        body: Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        execute(
            self.client
                .put(format!("{}/api/v1/applications/{id}", self.base_url))
                .bearer_auth(token.as_str())
                .json(&body),
        )
        .await
    }

    /// Delete an application.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the downstream service is unreachable.
    pub async fn delete(
        &self,
        token: &BearerToken,
        id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        execute(
            self.client
                .delete(format!("{}/api/v1/applications/{id}", self.base_url))
                .bearer_auth(token.as_str()),
        )
        .await
    }
}
