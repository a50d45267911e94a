//! Data models for the account service.

use chrono::{DateTime, Utc};
use common::secret::SecretString;
use common::types::Identity;
use serde::{Deserialize, Serialize};

/// Stored account record.
///
/// Lives behind the [`crate::repositories::CredentialStore`] seam; only the
/// bcrypt hash of the password is ever stored. `Debug` is safe to derive:
/// the hash is not a secret in the sense the plaintext is, and no plaintext
/// field exists on this type.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: Identity,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

/// Registration request body.
///
/// The password is a [`SecretString`] so request logging can never capture
/// it.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: SecretString,
    pub first_name: String,
    pub last_name: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

/// Public view of an account, returned by registration, login, and the
/// profile endpoint. Never includes the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: Identity,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.user_id.clone(),
            email: record.email.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
        }
    }
}

/// Response for successful registration and login: the issued token plus
/// the public profile.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserProfile,
}
