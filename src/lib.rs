//! waylog - personal travel-journal backend
//!
//! A REST backend for a personal travel journal: account registration and
//! login with bearer tokens, owner-scoped CRUD over journal entries,
//! substring search and date-range filtering, and image upload to a local
//! directory served back as static files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── server/     - Configuration, state, initialization
//! ├── routes/     - Router assembly and route table
//! ├── middleware/ - Bearer-token authentication
//! ├── error/      - ApiError taxonomy and response conversion
//! ├── auth/       - Users, tokens, account handlers
//! ├── journal/    - Entry model and CRUD/search handlers
//! └── media/      - Upload storage and media handlers
//! ```
//!
//! Each request runs as an independent tokio task; handlers await the
//! database, password hashing, and the filesystem but never block, and
//! shared state is limited to the connection pool and the startup
//! configuration inside [`server::AppState`].

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Bearer-token authentication middleware
pub mod middleware;

/// API error types
pub mod error;

/// Users, tokens, and account handlers
pub mod auth;

/// Journal entries and handlers
pub mod journal;

/// Image upload and storage
pub mod media;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
