//! Tracker Service Library
//!
//! Job-application records for JobTrail. Every record route sits behind the
//! authentication guard and every storage operation is keyed by the verified
//! identity, so one account can never observe another's records.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - Authentication guard
//! - `models` - Data models
//! - `repositories` - Application store seam
//! - `routes` - Router assembly

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
