//! Login logic: password verification and token issuance.

use crate::config::AccountConfig;
use crate::errors::AccountError;
use crate::models::{AuthResponse, LoginRequest};
use crate::repositories::CredentialStore;
use crate::services::issue_auth_response;
use common::jwt::TokenIssuer;
use common::secret::ExposeSecret;

/// Dummy bcrypt hash verified when the email is unknown, so a lookup miss
/// costs the same as a wrong password and response timing cannot be used to
/// enumerate registered emails.
const DUMMY_PASSWORD_HASH: &str = "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewY5GyYqExt7YD3a";

/// Authenticate an email/password pair and issue a token.
///
/// Unknown email and wrong password both return
/// [`AccountError::InvalidCredentials`] with identical timing
/// characteristics and an identical response body.
///
/// # Errors
///
/// Returns [`AccountError::InvalidCredentials`] when authentication fails;
/// storage and signing failures propagate.
pub async fn login_user(
    store: &dyn CredentialStore,
    issuer: &TokenIssuer,
    config: &AccountConfig,
    request: LoginRequest,
) -> Result<AuthResponse, AccountError> {
    let email = request.email.trim().to_lowercase();
    let record = store.find_by_email(&email).await?;

    // Always run bcrypt, with a dummy hash on lookup miss
    let hash_to_verify = record
        .as_ref()
        .map_or(DUMMY_PASSWORD_HASH, |r| r.password_hash.as_str());

    let password_ok =
        bcrypt::verify(request.password.expose_secret(), hash_to_verify).unwrap_or(false);

    let record = record.ok_or(AccountError::InvalidCredentials)?;

    if !password_ok {
        tracing::debug!(
            target: "account.services.session",
            user_id = %record.user_id,
            "Login rejected: wrong password"
        );
        return Err(AccountError::InvalidCredentials);
    }

    tracing::info!(
        target: "account.services.session",
        user_id = %record.user_id,
        "Login succeeded"
    );

    issue_auth_response(issuer, config.auth.token_ttl, &record)
}
