//! Media API integration tests
//!
//! The media endpoints only touch the filesystem, so these run without a
//! database: the app is spawned over a lazily-connecting pool that is
//! never used.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::json;

use common::database::lazy_pool;
use common::server::spawn_app;

#[tokio::test]
async fn upload_stores_file_and_returns_url() {
    let app = spawn_app(lazy_pool());

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"not really a png".to_vec())
            .file_name("great-wall.png")
            .mime_type("image/png"),
    );

    let response = app.server.post("/image-upload").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let image_url = body["imageUrl"].as_str().unwrap();
    assert!(image_url.starts_with("http://localhost:8000/uploads/"));
    assert!(image_url.ends_with(".png"));

    let filename = image_url.rsplit('/').next().unwrap();
    assert!(app.uploads_dir().join(filename).exists());
}

#[tokio::test]
async fn upload_without_image_part_is_rejected() {
    let app = spawn_app(lazy_pool());

    let form = MultipartForm::new().add_part(
        "attachment",
        Part::bytes(b"wrong field".to_vec()).file_name("file.bin"),
    );

    let response = app.server.post("/image-upload").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("No image uploaded"));
}

#[tokio::test]
async fn delete_image_removes_stored_file() {
    let app = spawn_app(lazy_pool());

    let filename = "stored.png";
    std::fs::write(app.uploads_dir().join(filename), b"bytes").unwrap();

    let response = app
        .server
        .delete("/delete-image")
        .add_query_param(
            "imageUrl",
            &format!("http://localhost:8000/uploads/{}", filename),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("Image deleted successfully"));
    assert!(!app.uploads_dir().join(filename).exists());
}

#[tokio::test]
async fn delete_image_reports_missing_file_as_soft_error() {
    let app = spawn_app(lazy_pool());

    let response = app
        .server
        .delete("/delete-image")
        .add_query_param("imageUrl", "http://localhost:8000/uploads/never-was.png")
        .await;

    // Still a 200; the body carries the error flag.
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!("Image not found"));
}

#[tokio::test]
async fn delete_image_requires_the_url_parameter() {
    let app = spawn_app(lazy_pool());

    let response = app.server.delete("/delete-image").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], json!("imageUrl parameter is required"));
}

#[tokio::test]
async fn delete_image_ignores_traversal_attempts() {
    let app = spawn_app(lazy_pool());

    let response = app
        .server
        .delete("/delete-image")
        .add_query_param("imageUrl", "http://localhost:8000/uploads/..")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], json!(true));
}
