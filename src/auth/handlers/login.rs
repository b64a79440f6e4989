/**
 * Login Handler
 *
 * Implements POST /login.
 *
 * # Authentication Process
 *
 * 1. Require email and password
 * 2. Look the user up by email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a fresh 72-hour access token
 *
 * Both failure branches respond 400 with the message texts existing
 * clients match on: "User Not found" and "Password is Invalid".
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{required, AuthResponse, LoginRequest, UserProfile};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = match (required(&request.email), required(&request.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ApiError::validation("Email and Password are required")),
    };

    let user = get_user_by_email(&state.db_pool, email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, user not found: {}", email);
            ApiError::bad_credentials("User Not found")
        })?;

    let valid = verify(password, &user.password_hash)
        .map_err(|e| ApiError::internal(format!("Password verification error: {}", e)))?;

    if !valid {
        tracing::warn!("Login failed, invalid password for: {}", email);
        return Err(ApiError::bad_credentials("Password is Invalid"));
    }

    let access_token = create_token(user.id, &state.config.jwt_secret)
        .map_err(|e| ApiError::internal(format!("Failed to create token: {}", e)))?;

    tracing::info!("User logged in: {}", user.email);

    Ok(Json(AuthResponse {
        error: false,
        user: UserProfile::from(&user),
        access_token,
        message: "Login successful".to_string(),
    }))
}
