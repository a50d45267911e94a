//! End-to-end tests for the guarded application routes.
//!
//! The central invariant under test: business logic never runs without a
//! verified identity. A counting decorator around the store proves that
//! rejected requests produce zero storage calls.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use common::config::AuthConfig;
use common::jwt::{Claims, TokenIssuer, TokenVerifier};
use common::types::Identity;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use tracker_service::errors::TrackerError;
use tracker_service::handlers::AppState;
use tracker_service::models::JobApplication;
use tracker_service::repositories::{ApplicationStore, InMemoryApplicationStore};
use tracker_service::routes;
use uuid::Uuid;

const TEST_SECRET: &str = "tracker-integration-signing-secret!!";
const OTHER_SECRET: &str = "a-completely-different-secret-32bytes";

/// Store decorator that counts every call that reaches the collaborator.
struct CountingStore {
    inner: InMemoryApplicationStore,
    calls: AtomicUsize,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: InMemoryApplicationStore::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApplicationStore for CountingStore {
    async fn insert(&self, application: JobApplication) -> Result<(), TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(application).await
    }

    async fn list_for(&self, owner: &Identity) -> Result<Vec<JobApplication>, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_for(owner).await
    }

    async fn find(
        &self,
        owner: &Identity,
        id: Uuid,
    ) -> Result<Option<JobApplication>, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find(owner, id).await
    }

    async fn save(&self, application: JobApplication) -> Result<(), TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.save(application).await
    }

    async fn delete(&self, owner: &Identity, id: Uuid) -> Result<bool, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(owner, id).await
    }
}

fn auth_config(secret: &str) -> AuthConfig {
    let vars = HashMap::from([("JWT_SECRET".to_string(), secret.to_string())]);
    AuthConfig::from_vars(&vars).expect("test auth config")
}

fn build_app(store: Arc<dyn ApplicationStore>) -> Router {
    let verifier = Arc::new(TokenVerifier::new(&auth_config(TEST_SECRET)));
    let state = Arc::new(AppState { store });
    routes::build_routes(state, verifier)
}

fn token_for(user: &str) -> String {
    let issuer = TokenIssuer::new(&auth_config(TEST_SECRET));
    issuer.issue(&Identity::new(user).unwrap()).unwrap()
}

fn payload(company: &str) -> Value {
    json!({
        "company": company,
        "position": "Senior Developer",
        "location": "Remote",
        "applied_date": "2025-05-01T00:00:00Z",
        "status": "APPLIED",
        "notes": "Submitted through the careers portal.",
    })
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

// ============================================================================
// The guard boundary
// ============================================================================

#[tokio::test]
async fn test_unauthenticated_request_never_reaches_the_store() {
    let store = Arc::new(CountingStore::new());
    let app = build_app(store.clone());

    // No Authorization header at all
    let (status, body) = send(&app, "GET", "/api/v1/applications", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");

    // A create attempt without credentials
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/applications",
        None,
        Some(payload("Acme")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(
        store.call_count(),
        0,
        "storage collaborator must receive zero calls for rejected requests"
    );
}

#[tokio::test]
async fn test_tampered_token_never_reaches_the_store() {
    let store = Arc::new(CountingStore::new());
    let app = build_app(store.clone());

    let token = token_for("user-42");
    let mut tampered = token.into_bytes();
    let position = tampered.len() / 2;
    tampered[position] = if tampered[position] == b'x' { b'y' } else { b'x' };
    let tampered = String::from_utf8(tampered).unwrap();

    let (status, _) = send(&app, "GET", "/api/v1/applications", Some(&tampered), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_expired_token_never_reaches_the_store() {
    let store = Arc::new(CountingStore::new());
    let app = build_app(store.clone());

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "user-42".to_string(),
        exp: now - 100,
        iat: now - 200,
    };
    let expired = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let (status, body) = send(&app, "GET", "/api/v1/applications", Some(&expired), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_rejection_bodies_are_uniform_across_failure_kinds() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));

    let (_, missing) = send(&app, "GET", "/api/v1/applications", None, None).await;
    let (_, garbage) = send(
        &app,
        "GET",
        "/api/v1/applications",
        Some("not-a-token"),
        None,
    )
    .await;

    let now = Utc::now().timestamp();
    let foreign = encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub: "user-42".to_string(),
            exp: now + 3600,
            iat: now,
        },
        &EncodingKey::from_secret(OTHER_SECRET.as_bytes()),
    )
    .unwrap();
    let (_, mismatched) = send(&app, "GET", "/api/v1/applications", Some(&foreign), None).await;

    assert_eq!(missing, garbage);
    assert_eq!(garbage, mismatched);
}

// ============================================================================
// Identity-scoped CRUD
// ============================================================================

#[tokio::test]
async fn test_create_and_list_are_scoped_to_the_token_identity() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));
    let alice = token_for("user-alice");
    let bob = token_for("user-bob");

    for company in ["Acme", "Globex"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/applications",
            Some(&alice),
            Some(payload(company)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/applications",
        Some(&bob),
        Some(payload("Initech")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, alice_list) = send(&app, "GET", "/api/v1/applications", Some(&alice), None).await;
    let (_, bob_list) = send(&app, "GET", "/api/v1/applications", Some(&bob), None).await;

    assert_eq!(alice_list.as_array().unwrap().len(), 2);
    assert_eq!(bob_list.as_array().unwrap().len(), 1);
    assert_eq!(bob_list[0]["company"], "Initech");
    assert_eq!(bob_list[0]["user_id"], "user-bob");
}

#[tokio::test]
async fn test_get_another_users_application_is_404() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));
    let alice = token_for("user-alice");
    let bob = token_for("user-bob");

    let (_, created) = send(
        &app,
        "POST",
        "/api/v1/applications",
        Some(&alice),
        Some(payload("Acme")),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    // The owner sees it
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/v1/applications/{id}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Anyone else gets the same 404 a nonexistent record would produce
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/applications/{id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_flow() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));
    let alice = token_for("user-alice");

    let (_, created) = send(
        &app,
        "POST",
        "/api/v1/applications",
        Some(&alice),
        Some(payload("Acme")),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let mut update = payload("Acme");
    update["status"] = json!("OFFER");
    update["salary"] = json!("135000");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/v1/applications/{id}"),
        Some(&alice),
        Some(update),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "OFFER");
    assert_eq!(updated["salary"], "135000");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_update_another_users_application_is_404() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));
    let alice = token_for("user-alice");
    let bob = token_for("user-bob");

    let (_, created) = send(
        &app,
        "POST",
        "/api/v1/applications",
        Some(&alice),
        Some(payload("Acme")),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/applications/{id}"),
        Some(&bob),
        Some(payload("Hijacked")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_flow() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));
    let alice = token_for("user-alice");

    let (_, created) = send(
        &app,
        "POST",
        "/api/v1/applications",
        Some(&alice),
        Some(payload("Acme")),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/applications/{id}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/v1/applications/{id}"),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_blank_company_is_400() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));
    let alice = token_for("user-alice");

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/applications",
        Some(&alice),
        Some(payload("   ")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_same_token_lists_consistently_across_repeated_requests() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));
    let alice = token_for("user-alice");

    send(
        &app,
        "POST",
        "/api/v1/applications",
        Some(&alice),
        Some(payload("Acme")),
    )
    .await;

    // Verification is stateless: the same token keeps resolving to the same
    // identity and the same records
    let (_, first) = send(&app, "GET", "/api/v1/applications", Some(&alice), None).await;
    let (_, second) = send(&app, "GET", "/api/v1/applications", Some(&alice), None).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = build_app(Arc::new(InMemoryApplicationStore::new()));

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
