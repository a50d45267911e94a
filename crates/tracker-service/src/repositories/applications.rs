//! Application store seam.
//!
//! The record-storage service is an opaque collaborator keyed by identity.
//! Every operation in the trait takes the owning [`Identity`], so a lookup
//! for another account's record is unrepresentable at this seam: the store
//! simply has no way to answer for a record the caller does not own.

use crate::errors::TrackerError;
use crate::models::JobApplication;
use async_trait::async_trait;
use common::types::Identity;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Interface to the application storage collaborator.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Persist a new application.
    async fn insert(&self, application: JobApplication) -> Result<(), TrackerError>;

    /// All applications owned by `owner`, most recently applied first.
    async fn list_for(&self, owner: &Identity) -> Result<Vec<JobApplication>, TrackerError>;

    /// One application, if it exists AND is owned by `owner`.
    async fn find(&self, owner: &Identity, id: Uuid)
        -> Result<Option<JobApplication>, TrackerError>;

    /// Replace an existing application. The record keeps its id and owner.
    async fn save(&self, application: JobApplication) -> Result<(), TrackerError>;

    /// Delete an application owned by `owner`. Returns whether anything was
    /// deleted.
    async fn delete(&self, owner: &Identity, id: Uuid) -> Result<bool, TrackerError>;
}

/// In-memory application store, keyed by (owner, id).
#[derive(Default)]
pub struct InMemoryApplicationStore {
    records: RwLock<HashMap<(String, Uuid), JobApplication>>,
}

impl InMemoryApplicationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn insert(&self, application: JobApplication) -> Result<(), TrackerError> {
        let key = (application.user_id.as_str().to_string(), application.id);
        let mut records = self.records.write().await;
        records.insert(key, application);
        Ok(())
    }

    async fn list_for(&self, owner: &Identity) -> Result<Vec<JobApplication>, TrackerError> {
        let records = self.records.read().await;
        let mut owned: Vec<JobApplication> = records
            .values()
            .filter(|a| &a.user_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        Ok(owned)
    }

    async fn find(
        &self,
        owner: &Identity,
        id: Uuid,
    ) -> Result<Option<JobApplication>, TrackerError> {
        let records = self.records.read().await;
        Ok(records.get(&(owner.as_str().to_string(), id)).cloned())
    }

    async fn save(&self, application: JobApplication) -> Result<(), TrackerError> {
        let key = (application.user_id.as_str().to_string(), application.id);
        let mut records = self.records.write().await;
        records.insert(key, application);
        Ok(())
    }

    async fn delete(&self, owner: &Identity, id: Uuid) -> Result<bool, TrackerError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&(owner.as_str().to_string(), id)).is_some())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::{ApplicationPayload, ApplicationStatus};
    use chrono::{Duration, Utc};

    fn application(owner: &str, company: &str, days_ago: i64) -> JobApplication {
        let payload = ApplicationPayload {
            company: company.to_string(),
            position: "Engineer".to_string(),
            location: "Remote".to_string(),
            applied_date: Utc::now() - Duration::days(days_ago),
            status: ApplicationStatus::Applied,
            notes: None,
            contact_name: None,
            contact_email: None,
            next_follow_up: None,
            salary: None,
        };
        payload.into_application(Identity::new(owner).unwrap(), Utc::now())
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let store = InMemoryApplicationStore::new();
        store.insert(application("user-1", "Acme", 1)).await.unwrap();
        store.insert(application("user-1", "Globex", 2)).await.unwrap();
        store.insert(application("user-2", "Initech", 1)).await.unwrap();

        let owner = Identity::new("user-1").unwrap();
        let listed = store.list_for(&owner).await.unwrap();

        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|a| a.user_id == owner));
    }

    #[tokio::test]
    async fn test_list_orders_by_applied_date_descending() {
        let store = InMemoryApplicationStore::new();
        store.insert(application("user-1", "Older", 10)).await.unwrap();
        store.insert(application("user-1", "Newest", 1)).await.unwrap();
        store.insert(application("user-1", "Middle", 5)).await.unwrap();

        let listed = store
            .list_for(&Identity::new("user-1").unwrap())
            .await
            .unwrap();

        let companies: Vec<&str> = listed.iter().map(|a| a.company.as_str()).collect();
        assert_eq!(companies, vec!["Newest", "Middle", "Older"]);
    }

    #[tokio::test]
    async fn test_find_for_wrong_owner_returns_none() {
        let store = InMemoryApplicationStore::new();
        let app = application("user-1", "Acme", 1);
        let id = app.id;
        store.insert(app).await.unwrap();

        let other = Identity::new("user-2").unwrap();
        assert!(store.find(&other, id).await.unwrap().is_none());

        let owner = Identity::new("user-1").unwrap();
        assert!(store.find(&owner, id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_is_scoped_to_owner() {
        let store = InMemoryApplicationStore::new();
        let app = application("user-1", "Acme", 1);
        let id = app.id;
        store.insert(app).await.unwrap();

        // The wrong owner deletes nothing
        let other = Identity::new("user-2").unwrap();
        assert!(!store.delete(&other, id).await.unwrap());

        let owner = Identity::new("user-1").unwrap();
        assert!(store.delete(&owner, id).await.unwrap());
        assert!(store.find(&owner, id).await.unwrap().is_none());
    }
}
