//! Data models for the tracker service.

use chrono::{DateTime, Utc};
use common::types::Identity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Progress of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    Accepted,
}

/// One tracked job application, owned by exactly one identity.
#[derive(Debug, Clone, Serialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub user_id: Identity,
    pub company: String,
    pub position: String,
    pub location: String,
    pub applied_date: DateTime<Utc>,
    pub status: ApplicationStatus,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating or fully updating an application.
///
/// The owning identity never comes from the payload; it is always the
/// verified identity from the request context.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationPayload {
    pub company: String,
    pub position: String,
    pub location: String,
    pub applied_date: DateTime<Utc>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub next_follow_up: Option<DateTime<Utc>>,
    #[serde(default)]
    pub salary: Option<String>,
}

impl ApplicationPayload {
    /// Validate the payload.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason if a required text field is empty
    /// after trimming.
    pub fn validate(&self) -> Result<(), String> {
        if self.company.trim().is_empty() {
            return Err("Company must not be empty".to_string());
        }
        if self.position.trim().is_empty() {
            return Err("Position must not be empty".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Location must not be empty".to_string());
        }
        Ok(())
    }

    /// Build a new application owned by `user_id`.
    #[must_use]
    pub fn into_application(self, user_id: Identity, now: DateTime<Utc>) -> JobApplication {
        JobApplication {
            id: Uuid::new_v4(),
            user_id,
            company: self.company,
            position: self.position,
            location: self.location,
            applied_date: self.applied_date,
            status: self.status,
            notes: self.notes.unwrap_or_default(),
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            next_follow_up: self.next_follow_up,
            salary: self.salary,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply this payload to an existing application, bumping `updated_at`.
    /// Identity, id, and `created_at` are immutable.
    pub fn apply_to(self, application: &mut JobApplication, now: DateTime<Utc>) {
        application.company = self.company;
        application.position = self.position;
        application.location = self.location;
        application.applied_date = self.applied_date;
        application.status = self.status;
        application.notes = self.notes.unwrap_or_default();
        application.contact_name = self.contact_name;
        application.contact_email = self.contact_email;
        application.next_follow_up = self.next_follow_up;
        application.salary = self.salary;
        application.updated_at = now;
    }
}
