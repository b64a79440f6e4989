/**
 * Registration Handler
 *
 * Implements POST /create-account.
 *
 * # Registration Process
 *
 * 1. Require fullName, email, and password
 * 2. Reject an already-registered email
 * 3. Hash the password with bcrypt
 * 4. Persist the user
 * 5. Issue a 72-hour access token
 *
 * # Errors
 *
 * * `400` - Missing field or email already registered
 * * `500` - Hashing, persistence, or token signing failure
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{required, AuthResponse, RegisterRequest, UserProfile};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register handler
///
/// Creates the account and returns the new profile together with a token,
/// so the client is authenticated immediately after registration.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (full_name, email, password) = match (
        required(&request.full_name),
        required(&request.email),
        required(&request.password),
    ) {
        (Some(full_name), Some(email), Some(password)) => (full_name, email, password),
        _ => return Err(ApiError::validation("All fields are required")),
    };

    if get_user_by_email(&state.db_pool, email).await?.is_some() {
        tracing::warn!("Registration rejected, email already exists: {}", email);
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash(password, DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("Failed to hash password: {}", e)))?;

    let user = create_user(&state.db_pool, full_name, email, &password_hash).await?;

    let access_token = create_token(user.id, &state.config.jwt_secret)
        .map_err(|e| ApiError::internal(format!("Failed to create token: {}", e)))?;

    tracing::info!("User registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            error: false,
            user: UserProfile::from(&user),
            access_token,
            message: "Registration successful".to_string(),
        }),
    ))
}
