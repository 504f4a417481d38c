//! Registration and login through the HTTP surface.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde_json::json;

use common::{test_config, TestApp, TEST_SECRET};
use relief_api::infra::MemoryStore;
use relief_api::services::{AuthService, Authenticator, Claims};
use relief_api::AppError;

fn ana() -> serde_json::Value {
    json!({"name": "Ana", "email": "a@x.com", "password": "p@ss1"})
}

#[tokio::test]
async fn test_register_then_login_scenario() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/v1/register", ana()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"success": true, "message": "User registered successfully"}));

    let (status, body) = app.post("/api/v1/register", ana()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User already exists");

    let (status, body) = app
        .post("/api/v1/login", json!({"email": "a@x.com", "password": "wrong"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");

    let (status, body) = app
        .post("/api/v1/login", json!({"email": "a@x.com", "password": "p@ss1"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_token_claims_match_account() {
    let app = TestApp::new();
    app.post("/api/v1/register", ana()).await;

    let (_, body) = app
        .post("/api/v1/login", json!({"email": "a@x.com", "password": "p@ss1"}))
        .await;

    let token = body["token"].as_str().unwrap();
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims;

    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.name, "Ana");
    assert_eq!(claims.role, "user");
    assert_eq!(body["expires_in"], claims.exp - claims.iat);
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_look_alike() {
    let app = TestApp::new();
    app.post("/api/v1/register", ana()).await;

    let wrong_password = app
        .post("/api/v1/login", json!({"email": "a@x.com", "password": "nope"}))
        .await;
    let unknown_email = app
        .post("/api/v1/login", json!({"email": "b@x.com", "password": "p@ss1"}))
        .await;

    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_stored_hashes_are_salted() {
    let app = TestApp::new();
    app.post("/api/v1/register", ana()).await;
    app.post(
        "/api/v1/register",
        json!({"name": "Ben", "email": "b@x.com", "password": "p@ss1"}),
    )
    .await;

    let users = app.store.users.snapshot();
    assert_eq!(users.len(), 2);
    assert_ne!(users[0].password_hash, "p@ss1");
    assert_ne!(users[0].password_hash, users[1].password_hash);
}

#[tokio::test]
async fn test_concurrent_registration_single_winner() {
    let store = Arc::new(MemoryStore::new());
    let auth = Arc::new(Authenticator::new(store.users.clone(), test_config()));

    let attempts = (0..8).map(|_| {
        let auth = auth.clone();
        async move {
            auth.register("Ana".into(), "a@x.com".into(), "p@ss1".into())
                .await
        }
    });
    let results = futures::future::join_all(attempts).await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, AppError::AlreadyExists(_))));
    assert_eq!(store.users.snapshot().len(), 1);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/register",
            json!({"name": "Ana", "email": "not-an-email", "password": "p@ss1"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Invalid email format");

    let (status, _) = app
        .post("/api/v1/register", json!({"name": "Ana", "email": "a@x.com", "password": ""}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/v1/register", json!({"email": "a@x.com", "password": "p@ss1"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.store.users.snapshot().is_empty());
}

#[tokio::test]
async fn test_users_listing_hides_password() {
    let app = TestApp::new();
    app.post("/api/v1/register", ana()).await;

    let (status, body) = app.get("/api/v1/users").await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "a@x.com");
    assert_eq!(users[0]["role"], "user");
    assert!(users[0].get("password_hash").is_none());
    assert!(!body.to_string().contains("$2"));
}
