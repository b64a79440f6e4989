//! Middleware Module
//!
//! Request-processing middleware. Currently holds the bearer-token
//! authentication layer applied to every protected route.

/// Bearer-token authentication
pub mod auth;

// Re-export commonly used items
pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
