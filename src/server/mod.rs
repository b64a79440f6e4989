//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration and database pool loading
//! └── init.rs   - Application assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env` resolves settings once
//! 2. **Database**: `load_database` connects the pool and runs migrations
//! 3. **Filesystem**: the uploads directory is created if absent
//! 4. **Router**: `create_app` wires everything into a `Router`
//!
//! State is passed explicitly through `AppState`; there are no process
//! globals beyond the tracing subscriber installed in `main`.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
