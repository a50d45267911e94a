//! HTTP request handlers for the gateway.

pub mod applications_handler;
pub mod auth_handler;
pub mod overview_handler;

pub use applications_handler::{
    create_application, delete_application, get_application, list_applications,
    update_application,
};
pub use auth_handler::{login, me, register, AppState};
pub use overview_handler::overview;

use crate::errors::GatewayError;
use serde_json::Value;

/// Parse a request body as JSON; the gateway validates shape only, field
/// semantics belong to the downstream service.
pub(crate) fn parse_json(body: &axum::body::Bytes) -> Result<Value, GatewayError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(target: "gateway.handlers", error = %e, "Invalid request body");
        GatewayError::BadRequest("Invalid request body".to_string())
    })
}
