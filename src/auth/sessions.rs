/**
 * Access Tokens
 *
 * This module handles signing and verification of the access tokens that
 * authenticate every protected request.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 72 hours
pub const TOKEN_TTL_SECS: u64 = 72 * 60 * 60;

/// Token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user's id
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a signed access token for a user
///
/// # Arguments
/// * `user_id` - Id of the user the token identifies
/// * `secret` - Signing secret from the server configuration
///
/// # Returns
/// Encoded token string, valid for [`TOKEN_TTL_SECS`]
pub fn create_token(user_id: Uuid, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = now_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a token's signature and expiry and decode its claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
