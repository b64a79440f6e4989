/**
 * Server Initialization
 *
 * Builds the application: configuration, database pool, uploads
 * directory, and the router.
 *
 * # Initialization Steps
 *
 * 1. Resolve `AppConfig` from the environment
 * 2. Connect the PostgreSQL pool and run migrations
 * 3. Create the uploads directory if it does not exist
 * 4. Assemble the router with the shared state
 */

use std::sync::Arc;

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the application
///
/// Returns the router together with the state so the caller can reach the
/// pool for shutdown and the config for the listen address.
///
/// # Errors
///
/// Fails if the database connection cannot be established. A missing
/// uploads directory that cannot be created is logged but not fatal;
/// uploads will fail individually until the directory is available.
pub async fn create_app() -> Result<(Router, AppState), sqlx::Error> {
    tracing::info!("Initializing waylog backend server");

    let config = Arc::new(AppConfig::from_env());

    let db_pool = load_database().await?;

    if let Err(e) = tokio::fs::create_dir_all(&config.uploads_dir).await {
        tracing::warn!(
            "Failed to create uploads directory {}: {}",
            config.uploads_dir.display(),
            e
        );
    }

    let app_state = AppState { db_pool, config };
    let app = create_router(app_state.clone());

    tracing::info!("Router configured");

    Ok((app, app_state))
}
