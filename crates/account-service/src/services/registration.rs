//! Registration logic: new-account creation with auto-login.

use crate::config::AccountConfig;
use crate::errors::AccountError;
use crate::models::{AuthResponse, RegisterRequest, UserRecord};
use crate::repositories::CredentialStore;
use crate::services::issue_auth_response;
use chrono::Utc;
use common::jwt::TokenIssuer;
use common::secret::ExposeSecret;
use common::types::Identity;
use uuid::Uuid;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Register a new account.
///
/// # Steps
///
/// 1. Validate email format
/// 2. Validate password (min 8 chars)
/// 3. Validate names (non-empty after trimming)
/// 4. Check email is not already registered
/// 5. Hash password with bcrypt
/// 6. Insert record
/// 7. Issue token (auto-login)
///
/// # Errors
///
/// Returns [`AccountError::BadRequest`] for validation failures, including
/// a duplicate email; storage and signing failures propagate.
pub async fn register_user(
    store: &dyn CredentialStore,
    issuer: &TokenIssuer,
    config: &AccountConfig,
    request: RegisterRequest,
) -> Result<AuthResponse, AccountError> {
    let email = request.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(AccountError::BadRequest("Invalid email format".to_string()));
    }

    if request.password.expose_secret().len() < MIN_PASSWORD_LENGTH {
        return Err(AccountError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let first_name = request.first_name.trim();
    let last_name = request.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(AccountError::BadRequest(
            "First and last name must not be empty".to_string(),
        ));
    }

    if store.find_by_email(&email).await?.is_some() {
        return Err(AccountError::BadRequest(
            "An account with this email already exists".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(request.password.expose_secret(), config.bcrypt_cost)
        .map_err(|e| {
            tracing::error!(target: "account.services.registration", error = %e, "Password hashing failed");
            AccountError::Internal
        })?;

    // UUID text is never empty, so this cannot fail in practice
    let user_id =
        Identity::new(Uuid::new_v4().to_string()).map_err(|_| AccountError::Internal)?;

    let record = UserRecord {
        user_id,
        email,
        password_hash,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        created_at: Utc::now(),
    };

    store.insert(record.clone()).await?;

    tracing::info!(
        target: "account.services.registration",
        user_id = %record.user_id,
        "Account registered"
    );

    issue_auth_response(issuer, config.auth.token_ttl, &record)
}

/// Simple email validation: something@something.something, with no empty
/// segments.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    let domain_parts: Vec<&str> = domain.split('.').collect();
    if domain_parts.len() < 2 {
        return false;
    }

    domain_parts.iter().all(|p| !p.is_empty())
}
