//! Account Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - Registration handler
//! ├── login.rs    - Login handler
//! └── me.rs       - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /create-account
//! - **`login`** - POST /login
//! - **`get_user`** - GET /get-user (protected)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest, UserProfile};

// Re-export handlers
pub use login::login;
pub use me::get_user;
pub use register::register;
