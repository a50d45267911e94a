//! Business logic layer for the account service.
//!
//! # Components
//!
//! - `registration` - New-account creation with auto-login
//! - `session` - Password login and token issuance

pub mod registration;
pub mod session;

use crate::errors::AccountError;
use crate::models::{AuthResponse, UserProfile, UserRecord};
use common::jwt::TokenIssuer;
use std::time::Duration;

/// Issue a token for `record` and assemble the auth response returned by
/// both registration and login.
pub(crate) fn issue_auth_response(
    issuer: &TokenIssuer,
    token_ttl: Duration,
    record: &UserRecord,
) -> Result<AuthResponse, AccountError> {
    let token = issuer.issue(&record.user_id)?;

    Ok(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: token_ttl.as_secs(),
        user: UserProfile::from(record),
    })
}
