//! Middleware for the tracker service.

pub mod auth;

pub use auth::{require_identity, AuthState};
