//! Common data types shared across JobTrail services.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when an identity value fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The identity string was empty or contained only whitespace.
    #[error("Identity must not be empty")]
    Empty,
}

/// Opaque, stable identifier naming one registered account.
///
/// Created at registration and immutable afterwards. The value is treated as
/// an opaque string everywhere outside the account service; nothing parses
/// it. Construction rejects empty and whitespace-only values, so an empty
/// identity can never reach the token issuer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Identity(String);

impl Identity {
    /// Create an identity from a raw string value.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Empty`] if the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self(value))
    }

    /// The identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
