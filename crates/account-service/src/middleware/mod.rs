//! Middleware for the account service.

pub mod auth;

pub use auth::{require_identity, AuthState};
