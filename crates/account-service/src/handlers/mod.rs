//! HTTP request handlers for the account service.

pub mod auth_handler;

pub use auth_handler::{login, profile, register, AppState};
