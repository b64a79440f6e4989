/**
 * Router Configuration
 *
 * Combines the API routes, static file services, and cross-cutting
 * layers into the final Axum router.
 *
 * # Route Order
 *
 * 1. API routes (public + token-protected)
 * 2. Static services: `/uploads` (stored images) and `/assets`
 * 3. Fallback handler (404)
 *
 * The CORS layer is permissive, as the original served `origin: *`.
 */

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(app_state.clone());

    let router = router
        .nest_service("/uploads", ServeDir::new(&app_state.config.uploads_dir))
        .nest_service("/assets", ServeDir::new(&app_state.config.assets_dir));

    let router = router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
