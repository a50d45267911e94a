//! Account Service Library
//!
//! User accounts and credential issuance for JobTrail: registration, login,
//! and the profile endpoint. Registration and login are the only places in
//! the system that issue tokens; every other service merely verifies them.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - Authentication guard
//! - `models` - Data models
//! - `repositories` - Credential store seam
//! - `routes` - Router assembly
//! - `services` - Business logic layer

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
