/**
 * Image Storage
 *
 * Filesystem operations for uploaded images. Files live flat in the
 * configured uploads directory under generated names; the public URL for
 * a file is the configured base URL plus `/uploads/<filename>`.
 */

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Generate a unique filename, preserving the upload's extension
///
/// The stored name is a fresh UUID so client-chosen names never reach the
/// filesystem. The extension is kept only when it is a short alphanumeric
/// suffix.
pub fn generate_filename(original_name: Option<&str>) -> String {
    let id = Uuid::new_v4();

    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    match extension {
        Some(ext) => format!("{}.{}", id, ext.to_ascii_lowercase()),
        None => id.to_string(),
    }
}

/// Derive the stored filename from an image URL
///
/// Takes the final path segment, dropping any query or fragment. Returns
/// `None` for empty names and for anything that could escape the uploads
/// directory.
pub fn filename_from_url(image_url: &str) -> Option<String> {
    let without_fragment = image_url.split('#').next().unwrap_or(image_url);
    let without_query = without_fragment.split('?').next().unwrap_or(without_fragment);
    let filename = without_query.rsplit('/').next().unwrap_or(without_query);

    if filename.is_empty() || filename == ".." || filename == "." || filename.contains('\\') {
        return None;
    }

    Some(filename.to_string())
}

/// Public URL for a stored file
pub fn public_url(base_url: &str, filename: &str) -> String {
    format!("{}/uploads/{}", base_url.trim_end_matches('/'), filename)
}

/// Write an uploaded file into the uploads directory
pub async fn save(dir: &Path, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

/// Remove a stored file; `Ok(false)` when it was already gone
pub async fn remove(dir: &Path, filename: &str) -> io::Result<bool> {
    let path = dir.join(filename);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Whether a stored file currently exists
pub async fn exists(dir: &Path, filename: &str) -> bool {
    tokio::fs::try_exists(dir.join(filename))
        .await
        .unwrap_or(false)
}
