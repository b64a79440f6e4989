/**
 * API Route Handlers
 *
 * Route table for the JSON API. Protected routes sit on their own
 * sub-router behind the bearer-token middleware; account creation, login,
 * and the media endpoints are public, matching the original contract.
 *
 * # Routes
 *
 * ## Public
 * - `POST /create-account` - Registration
 * - `POST /login` - Login
 * - `POST /image-upload` - Image upload
 * - `DELETE /delete-image` - Image deletion by URL
 *
 * ## Protected (Authorization: Bearer <token>)
 * - `GET /get-user` - Current user
 * - `POST /add-travel-journal` - Create entry
 * - `GET /get-all-journals` - List entries
 * - `PUT /edit-journal/{id}` - Edit entry
 * - `DELETE /delete-journal/{id}` - Delete entry
 * - `PUT /update-is-favourite/{id}` - Set favourite flag
 * - `GET /search` - Substring search
 * - `GET /travel-journals/filter` - Date-range filter
 */

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::{get_user, login, register};
use crate::journal::{
    add_journal, delete_journal, edit_journal, filter_journals, get_all_journals, search_journals,
    update_is_favourite,
};
use crate::media::{delete_image, upload_image};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Build the API routes
///
/// # Arguments
///
/// * `app_state` - Shared state, also handed to the auth middleware
pub fn configure_api_routes(app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/get-user", get(get_user))
        .route("/add-travel-journal", post(add_journal))
        .route("/get-all-journals", get(get_all_journals))
        .route("/edit-journal/{id}", put(edit_journal))
        .route("/delete-journal/{id}", delete(delete_journal))
        .route("/update-is-favourite/{id}", put(update_is_favourite))
        .route("/search", get(search_journals))
        .route("/travel-journals/filter", get(filter_journals))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    Router::new()
        .route("/create-account", post(register))
        .route("/login", post(login))
        .route("/image-upload", post(upload_image))
        .route("/delete-image", delete(delete_image))
        .merge(protected)
}
