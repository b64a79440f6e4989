//! Account API integration tests
//!
//! End-to-end tests for registration, login, and the current-user
//! endpoint. These need a PostgreSQL instance via `DATABASE_URL` and
//! skip themselves when none is configured.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use common::auth_helpers::register_user;
use common::database::TestDatabase;
use common::server::spawn_app;

#[tokio::test]
#[serial]
async fn register_returns_profile_and_token() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    let app = spawn_app(db.pool().clone());

    let response = app
        .server
        .post("/create-account")
        .json(&json!({
            "fullName": "Maya Chen",
            "email": "maya@example.com",
            "password": "wanderlust",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["user"]["fullName"], json!("Maya Chen"));
    assert_eq!(body["user"]["email"], json!("maya@example.com"));
    assert!(body["accessToken"].as_str().is_some_and(|t| !t.is_empty()));

    // The hash must never appear on the wire.
    let raw = response.text();
    assert!(!raw.contains("passwordHash"));
    assert!(!raw.contains("password_hash"));
}

#[tokio::test]
#[serial]
async fn register_rejects_missing_fields() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    let app = spawn_app(db.pool().clone());

    for payload in [
        json!({ "email": "maya@example.com", "password": "wanderlust" }),
        json!({ "fullName": "Maya Chen", "password": "wanderlust" }),
        json!({ "fullName": "Maya Chen", "email": "maya@example.com" }),
        json!({ "fullName": "", "email": "maya@example.com", "password": "wanderlust" }),
    ] {
        let response = app.server.post("/create-account").json(&payload).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], json!(true));
        assert_eq!(body["message"], json!("All fields are required"));
    }

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(users, 0);
}

#[tokio::test]
#[serial]
async fn register_rejects_duplicate_email() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    let app = spawn_app(db.pool().clone());

    register_user(&app.server, "Maya Chen", "maya@example.com", "wanderlust").await;

    let response = app
        .server
        .post("/create-account")
        .json(&json!({
            "fullName": "Another Maya",
            "email": "maya@example.com",
            "password": "different",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("User already exists"));

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("maya@example.com")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(users, 1);
}

#[tokio::test]
#[serial]
async fn login_round_trip_authenticates_get_user() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    let app = spawn_app(db.pool().clone());

    register_user(&app.server, "Maya Chen", "maya@example.com", "wanderlust").await;

    let login = app
        .server
        .post("/login")
        .json(&json!({ "email": "maya@example.com", "password": "wanderlust" }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let body: serde_json::Value = login.json();
    let token = body["accessToken"].as_str().unwrap().to_string();

    let me = app.server.get("/get-user").authorization_bearer(&token).await;
    assert_eq!(me.status_code(), StatusCode::OK);
    let me_body: serde_json::Value = me.json();
    assert_eq!(me_body["user"]["email"], json!("maya@example.com"));
    assert_eq!(me_body["user"]["fullName"], json!("Maya Chen"));
    assert!(me_body["user"]["id"].as_str().is_some());
    assert!(!me.text().contains("passwordHash"));
}

#[tokio::test]
#[serial]
async fn login_rejects_wrong_password() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    let app = spawn_app(db.pool().clone());

    register_user(&app.server, "Maya Chen", "maya@example.com", "wanderlust").await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": "maya@example.com", "password": "wrong" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("Password is Invalid"));
    assert!(body.get("accessToken").is_none());
}

#[tokio::test]
#[serial]
async fn login_rejects_unknown_email() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    let app = spawn_app(db.pool().clone());

    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("User Not found"));
}

#[tokio::test]
#[serial]
async fn get_user_requires_token() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    let app = spawn_app(db.pool().clone());

    let missing = app.server.get("/get-user").await;
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);

    let invalid = app
        .server
        .get("/get-user")
        .authorization_bearer("invalid.token.here")
        .await;
    assert_eq!(invalid.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn get_user_returns_401_when_user_is_gone() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: DATABASE_URL not set");
        return;
    };
    let app = spawn_app(db.pool().clone());

    let token = register_user(&app.server, "Maya Chen", "maya@example.com", "wanderlust").await;

    sqlx::query("DELETE FROM users WHERE email = $1")
        .bind("maya@example.com")
        .execute(db.pool())
        .await
        .unwrap();

    let response = app.server.get("/get-user").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
