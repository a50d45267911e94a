//! Credential store seam.
//!
//! The persistent "store identity + password hash / look up identity by
//! email" service is an opaque collaborator; its storage format is not this
//! service's concern. The trait below is everything the account service
//! needs from it. [`InMemoryCredentialStore`] is the default implementation
//! and the one tests run against.

use crate::errors::AccountError;
use crate::models::UserRecord;
use async_trait::async_trait;
use common::types::Identity;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Interface to the credential storage collaborator.
///
/// Uniqueness of emails is enforced by the caller (the registration service
/// checks before inserting); the store itself is a plain keyed collection.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persist a new account record.
    async fn insert(&self, record: UserRecord) -> Result<(), AccountError>;

    /// Look up an account by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AccountError>;

    /// Look up an account by identity.
    async fn find_by_id(&self, user_id: &Identity) -> Result<Option<UserRecord>, AccountError>;
}

/// In-memory credential store, keyed by email.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn insert(&self, record: UserRecord) -> Result<(), AccountError> {
        let mut records = self.records.write().await;
        records.insert(record.email.clone(), record);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AccountError> {
        let records = self.records.read().await;
        Ok(records.get(email).cloned())
    }

    async fn find_by_id(&self, user_id: &Identity) -> Result<Option<UserRecord>, AccountError> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| &r.user_id == user_id).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(email: &str, user_id: &str) -> UserRecord {
        UserRecord {
            user_id: Identity::new(user_id).unwrap(),
            email: email.to_string(),
            password_hash: "$2b$12$hash".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_by_email() {
        let store = InMemoryCredentialStore::new();
        store
            .insert(record("alice@example.com", "user-1"))
            .await
            .unwrap();

        let found = store.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.unwrap().user_id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn test_find_by_email_miss() {
        let store = InMemoryCredentialStore::new();
        let found = store.find_by_email("nobody@example.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = InMemoryCredentialStore::new();
        store
            .insert(record("alice@example.com", "user-1"))
            .await
            .unwrap();
        store
            .insert(record("bob@example.com", "user-2"))
            .await
            .unwrap();

        let found = store
            .find_by_id(&Identity::new("user-2").unwrap())
            .await
            .unwrap();
        assert_eq!(found.unwrap().email, "bob@example.com");
    }
}
