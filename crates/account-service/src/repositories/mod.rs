//! Storage seams for the account service.
//!
//! The credential store is an external collaborator; this module defines the
//! interface the service needs from it and an in-memory implementation.

pub mod credentials;

pub use credentials::{CredentialStore, InMemoryCredentialStore};
