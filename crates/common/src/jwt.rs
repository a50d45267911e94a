//! Token issuance and verification shared across JobTrail services.
//!
//! This module is the whole credential contract between the account service
//! (which issues tokens), the tracker service (which verifies them), and the
//! gateway (which extracts and forwards them):
//!
//! - [`TokenIssuer`] — signs an identity into a time-bounded HS256 token
//! - [`TokenVerifier`] — recovers the identity or rejects the token
//! - [`parse_bearer`] — `Authorization` header parsing shared by every layer
//!
//! Both sides are constructed from the same [`AuthConfig`]; the deployment
//! must give every process a byte-identical signing secret.
//!
//! # Security
//!
//! - Tokens are size-checked BEFORE parsing
//! - Only HS256 is accepted; tokens claiming another algorithm are rejected
//! - Expiry is strict: a token with expiry `T` is rejected at any instant
//!   `>= T`. Clock-skew tolerance applies to the issued-at claim only.
//! - Every verification failure carries one identical display message, so a
//!   response body can never reveal which check failed. The precise cause is
//!   logged at debug level only.

use crate::config::AuthConfig;
use crate::types::Identity;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Maximum allowed token size in bytes (8KB).
///
/// Tokens larger than this are rejected before any base64 decoding or
/// signature work happens. Real tokens from this issuer are a few hundred
/// bytes; anything near the limit is garbage or an attack.
pub const MAX_TOKEN_SIZE_BYTES: usize = 8192;

/// Default token lifetime (24 hours).
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default tolerance for issued-at timestamps from a skewed clock (5 minutes).
pub const DEFAULT_CLOCK_SKEW: Duration = Duration::from_secs(300);

/// Maximum allowed clock skew tolerance (10 minutes).
///
/// Caps misconfiguration so the acceptance window cannot be widened
/// arbitrarily.
pub const MAX_CLOCK_SKEW: Duration = Duration::from_secs(600);

/// The one message every verification failure displays.
const INVALID_TOKEN_MESSAGE: &str = "The access token is invalid or expired";

// =============================================================================
// Error Types
// =============================================================================

/// Errors from token issuance and verification.
///
/// The four verification variants deliberately share one display message:
/// a caller that forwards `to_string()` to a client cannot leak whether the
/// token was missing, malformed, expired, or wrongly signed. Internal
/// logging distinguishes them; response payloads must not.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No credential was presented.
    #[error("{INVALID_TOKEN_MESSAGE}")]
    MissingCredential,

    /// The token could not be parsed, is oversized, claims a different
    /// algorithm, or carries unusable claims.
    #[error("{INVALID_TOKEN_MESSAGE}")]
    MalformedCredential,

    /// The token is structurally valid but past its expiry.
    #[error("{INVALID_TOKEN_MESSAGE}")]
    ExpiredCredential,

    /// The signature does not match the shared secret.
    #[error("{INVALID_TOKEN_MESSAGE}")]
    SignatureMismatch,

    /// Issuer-side signing failure. Never produced by verification.
    #[error("Token signing failed")]
    Signing,
}

// =============================================================================
// Claims
// =============================================================================

/// Claims embedded in every issued token.
///
/// The `sub` field holds the account identity and is redacted in `Debug`
/// output.
#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account identity the token asserts.
    pub sub: String,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("sub", &"[REDACTED]")
            .field("exp", &self.exp)
            .field("iat", &self.iat)
            .finish()
    }
}

// =============================================================================
// Bearer extraction
// =============================================================================

/// Extract the token from an `Authorization` header value.
///
/// - `"Bearer <token>"` yields `<token>`
/// - a bare value without the prefix is returned as-is (compatibility
///   fallback for clients that send the raw token)
/// - an absent or empty header yields `None`
///
/// Performs no verification; every layer that parses the header goes through
/// this function so the client's token reaches each service byte-identical.
#[must_use]
pub fn parse_bearer(header: Option<&str>) -> Option<&str> {
    let value = header?;
    if value.is_empty() {
        return None;
    }
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}

// =============================================================================
// Issuer
// =============================================================================

/// Signs identities into time-bounded tokens.
///
/// Construct one per process from the shared [`AuthConfig`]. Issuance is a
/// pure computation over the identity, the secret, and the current time; two
/// issuances for the same identity at different instants differ in `iat` and
/// `exp` and are therefore byte-distinct strings.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_seconds: i64,
}

impl TokenIssuer {
    /// Create an issuer from the shared auth configuration.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(
                config.signing_secret.expose_secret().as_bytes(),
            ),
            ttl_seconds: i64::try_from(config.token_ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Issue a token asserting `identity` until now + TTL.
    ///
    /// An empty identity is unrepresentable ([`Identity`] construction
    /// rejects it), so the only failure left is the signing step itself.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if HMAC signing fails.
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// Deterministic issuance against an explicit `now` timestamp.
    ///
    /// Prefer [`TokenIssuer::issue`] in production code. This variant exists
    /// so expiry boundaries can be tested without wall-clock dependence.
    pub(crate) fn issue_at(&self, identity: &Identity, now: i64) -> Result<String, TokenError> {
        let claims = Claims {
            sub: identity.as_str().to_owned(),
            exp: now.saturating_add(self.ttl_seconds),
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(target: "common.jwt", error = %e, "Token signing failed");
            TokenError::Signing
        })
    }
}

// =============================================================================
// Verifier
// =============================================================================

/// Recovers the identity from a presented token, or rejects it.
///
/// Verification is stateless and side-effect free: a pure function of the
/// token, the shared secret, and the current time. Repeated calls on the
/// same token within its lifetime always return the same identity.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    clock_skew_seconds: i64,
}

impl TokenVerifier {
    /// Create a verifier from the shared auth configuration.
    ///
    /// The secret must be byte-identical to the issuer's or every
    /// verification fails with [`TokenError::SignatureMismatch`].
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by `check_expiry_at` with a strict boundary;
        // the library check would accept tokens inside its leeway window.
        validation.validate_exp = false;

        Self {
            decoding_key: DecodingKey::from_secret(
                config.signing_secret.expose_secret().as_bytes(),
            ),
            validation,
            clock_skew_seconds: i64::try_from(config.clock_skew.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Verify a token and return the identity it asserts.
    ///
    /// Checks, in order: size limit, structural shape, HS256 signature,
    /// strict expiry, issued-at within clock-skew tolerance, non-empty
    /// subject.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] verification variant; all of them display
    /// the same message. Callers must not surface which variant occurred to
    /// the end client.
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Deterministic verification against an explicit `now` timestamp.
    pub(crate) fn verify_at(&self, token: &str, now: i64) -> Result<Identity, TokenError> {
        if token.len() > MAX_TOKEN_SIZE_BYTES {
            tracing::debug!(
                target: "common.jwt",
                token_size = token.len(),
                max_size = MAX_TOKEN_SIZE_BYTES,
                "Token rejected: size exceeds maximum allowed"
            );
            return Err(TokenError::MalformedCredential);
        }

        if token.split('.').count() != 3 {
            tracing::debug!(target: "common.jwt", "Token rejected: not header.payload.signature");
            return Err(TokenError::MalformedCredential);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => {
                    tracing::debug!(target: "common.jwt", "Token rejected: signature mismatch");
                    TokenError::SignatureMismatch
                }
                ErrorKind::ExpiredSignature => TokenError::ExpiredCredential,
                kind => {
                    tracing::debug!(target: "common.jwt", error = ?kind, "Token rejected: malformed");
                    TokenError::MalformedCredential
                }
            }
        })?;

        check_expiry_at(data.claims.exp, now)?;
        validate_iat_at(data.claims.iat, self.clock_skew_seconds, now)?;

        Identity::new(data.claims.sub).map_err(|_| {
            tracing::debug!(target: "common.jwt", "Token rejected: empty subject");
            TokenError::MalformedCredential
        })
    }
}

/// Strict expiry check: a token with expiry `exp` is valid at instants
/// `< exp` and rejected at `>= exp`. No leeway.
fn check_expiry_at(exp: i64, now: i64) -> Result<(), TokenError> {
    if now >= exp {
        tracing::debug!(
            target: "common.jwt",
            exp = exp,
            now = now,
            "Token rejected: expired"
        );
        return Err(TokenError::ExpiredCredential);
    }
    Ok(())
}

/// Reject issued-at timestamps more than `clock_skew_seconds` in the future.
///
/// A far-future `iat` means a skewed issuer clock or a manipulated token;
/// either way the token is not trustworthy.
fn validate_iat_at(iat: i64, clock_skew_seconds: i64, now: i64) -> Result<(), TokenError> {
    if iat > now.saturating_add(clock_skew_seconds) {
        tracing::debug!(
            target: "common.jwt",
            iat = iat,
            now = now,
            clock_skew_seconds = clock_skew_seconds,
            "Token rejected: iat too far in the future"
        );
        return Err(TokenError::MalformedCredential);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
