/**
 * Account Handler Types
 *
 * Request and response types shared by the register, login, and
 * current-user handlers.
 *
 * Required fields are deserialized as `Option` so the handlers can reject
 * missing or empty input with the contract's 400 response instead of a
 * deserialization rejection.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request for POST /create-account
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request for POST /login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Profile returned by register and login
///
/// Only the display name and email; the full document stays behind
/// `/get-user`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Response for register and login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub error: bool,
    pub user: UserProfile,
    pub access_token: String,
    pub message: String,
}

/// Response for GET /get-user
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: User,
    pub message: String,
}

/// Returns the field value when it is present and non-empty
///
/// Mirrors the contract's treatment of empty strings as missing input.
pub fn required<'a>(value: &'a Option<String>) -> Option<&'a str> {
    value.as_deref().filter(|s| !s.is_empty())
}
