//! Authentication Module
//!
//! User accounts, password verification, and access tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── users.rs    - User model and database operations
//! ├── sessions.rs - Access token signing and verification
//! └── handlers/   - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs
//!     ├── register.rs
//!     ├── login.rs
//!     └── me.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: fullName + email + password → user created → token returned
//! 2. **Login**: email + password → credentials verified → token returned
//! 3. **Get user**: token → identity resolved → user document returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Tokens are signed, carry only the user id, and expire after 72 hours
//! - The ownership of every journal entry is derived from the token, never
//!   from client input

/// User data model and database operations
pub mod users;

/// Access token signing and verification
pub mod sessions;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_user, login, register};
pub use users::User;
