//! Media Module
//!
//! Upload and deletion of journal images on local disk.
//!
//! # Module Structure
//!
//! ```text
//! media/
//! ├── mod.rs      - Module exports and documentation
//! ├── storage.rs  - Filesystem operations and URL derivation
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! Stored files are addressed only through generated filenames embedded
//! in entry `imageUrl` fields and served back via `/uploads`.

/// Filesystem operations for stored images
pub mod storage;

/// HTTP handlers for upload and deletion
pub mod handlers;

// Re-export commonly used handlers
pub use handlers::{delete_image, upload_image};
