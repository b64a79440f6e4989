/**
 * Current User Handler
 *
 * Implements GET /get-user. The auth middleware has already verified the
 * token; this handler resolves the identity to a user document. A token
 * whose user no longer exists yields a bare 401, the same as an invalid
 * token.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::CurrentUserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Current user handler
///
/// Returns the caller's full user document (password hash omitted).
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<CurrentUserResponse>, ApiError> {
    let user = get_user_by_id(&state.db_pool, identity.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token user no longer exists: {}", identity.user_id);
            ApiError::Unauthenticated
        })?;

    Ok(Json(CurrentUserResponse {
        user,
        message: String::new(),
    }))
}
