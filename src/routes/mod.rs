//! Route Configuration Module
//!
//! HTTP route configuration for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint route table
//! ```

/// Main router creation
pub mod router;

/// API endpoint route table
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
