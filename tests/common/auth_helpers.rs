//! Authentication test helpers

use axum_test::TestServer;
use serde_json::json;

/// Register an account and return its access token
pub async fn register_user(
    server: &TestServer,
    full_name: &str,
    email: &str,
    password: &str,
) -> String {
    let response = server
        .post("/create-account")
        .json(&json!({
            "fullName": full_name,
            "email": email,
            "password": password,
        }))
        .await;

    let body: serde_json::Value = response.json();
    body.get("accessToken")
        .and_then(|t| t.as_str())
        .expect("registration should return accessToken")
        .to_string()
}

/// Create a journal entry and return its id
pub async fn create_entry(
    server: &TestServer,
    token: &str,
    title: &str,
    visited_date_ms: i64,
) -> String {
    let response = server
        .post("/add-travel-journal")
        .authorization_bearer(token)
        .json(&json!({
            "title": title,
            "journal": format!("Notes about {}", title),
            "visitedLocation": ["Somewhere"],
            "imageUrl": "http://localhost:8000/uploads/placeholder-test.png",
            "visitedDate": visited_date_ms,
        }))
        .await;

    let body: serde_json::Value = response.json();
    body.pointer("/journal/id")
        .and_then(|id| id.as_str())
        .expect("entry creation should return an id")
        .to_string()
}
