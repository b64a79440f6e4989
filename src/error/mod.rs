//! API Error Module
//!
//! This module defines the error taxonomy used by all HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - Missing or malformed required input (400)
//! - `Conflict` - Duplicate email at registration (400)
//! - `BadCredentials` - Login failures, kept at 400 for wire compatibility
//! - `Unauthenticated` - Missing/invalid/expired token (bare 401)
//! - `NotFound` - Entry absent or owned by another user (404)
//! - `MissingQuery` - Absent search query (404, a preserved quirk)
//! - `Database` / `Internal` - Persistence or unexpected failures (500)
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers return
//! `Result<_, ApiError>` and conversion happens only at the request
//! boundary. Error bodies are `{"error": true, "message": "..."}`;
//! `Unauthenticated` responds with a status code and no body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
