/**
 * Media Handlers
 *
 * HTTP handlers for image upload and deletion.
 *
 * # Routes
 *
 * - `POST /image-upload` - Store a multipart image, return its URL
 * - `DELETE /delete-image?imageUrl=` - Remove a stored image by URL
 *
 * Deletion reports a missing file as a 200 with a soft error body; only
 * a missing `imageUrl` parameter is an HTTP failure.
 */

use axum::{
    extract::{Multipart, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::media::storage;
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteImageParams {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Upload handler for POST /image-upload
///
/// Reads the multipart part named `image`, stores it under a generated
/// filename, and returns the public URL.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut stored: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::validation(format!("Failed to read upload: {}", e)))?;

        let filename = storage::generate_filename(original_name.as_deref());
        storage::save(&state.config.uploads_dir, &filename, &bytes)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to store image: {}", e)))?;

        tracing::info!("Stored uploaded image {} ({} bytes)", filename, bytes.len());
        stored = Some(filename);
        break;
    }

    let filename = stored.ok_or_else(|| ApiError::validation("No image uploaded"))?;
    let image_url = storage::public_url(&state.config.public_base_url, &filename);

    Ok(Json(serde_json::json!({ "imageUrl": image_url })))
}

/// Delete handler for DELETE /delete-image
pub async fn delete_image(
    State(state): State<AppState>,
    Query(params): Query<DeleteImageParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let image_url = params
        .image_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::validation("imageUrl parameter is required"))?;

    let removed = match storage::filename_from_url(image_url) {
        Some(filename) => storage::remove(&state.config.uploads_dir, &filename)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to delete image: {}", e)))?,
        None => false,
    };

    if removed {
        Ok(Json(
            serde_json::json!({ "message": "Image deleted successfully" }),
        ))
    } else {
        // Soft failure: still a 200, the body carries the error flag.
        Ok(Json(
            serde_json::json!({ "error": true, "message": "Image not found" }),
        ))
    }
}
