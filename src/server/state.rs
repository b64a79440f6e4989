/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * `PgPool` is internally reference-counted and `AppConfig` is behind an
 * `Arc`, so `AppState` clones are cheap and handlers never contend on
 * shared locks.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::AppConfig;

/// Central state container handed to every handler
///
/// Holds the database connection pool and the resolved configuration.
/// Handlers that only need one of the two can extract it directly through
/// the `FromRef` implementations below.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Configuration resolved once at startup
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
