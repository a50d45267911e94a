//! Gateway Service Library
//!
//! The aggregation gateway for JobTrail. Per request it extracts the bearer
//! token from the `Authorization` header and forwards it, unchanged, to the
//! account and tracker services. It never verifies tokens itself — that is
//! the downstream guards' job — but it does reject identity-requiring
//! operations with no token at all before making any downstream call.
//!
//! # Modules
//!
//! - `clients` - HTTP clients for the downstream services
//! - `config` - Service configuration
//! - `context` - Per-request bearer extraction
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `routes` - Router assembly

pub mod clients;
pub mod config;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod routes;
