/**
 * API Error Types
 *
 * This module defines the error enum returned by HTTP handlers. Each
 * variant maps to the HTTP status code the original wire contract uses,
 * including the two deliberate quirks: login failures respond 400 (not
 * 401/404) and a missing search query responds 404 (not 400).
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by request handlers
///
/// Handlers construct these with the helper constructors below and
/// propagate them with `?`; the `IntoResponse` impl in `conversion.rs`
/// turns them into JSON error bodies at the request boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required input
    #[error("{message}")]
    Validation { message: String },

    /// Duplicate email at registration
    ///
    /// The wire contract reports this as 400, not 409.
    #[error("{message}")]
    Conflict { message: String },

    /// Login failure: unknown email or wrong password
    ///
    /// Responds 400 with the exact message text existing clients match on
    /// ("User Not found", "Password is Invalid").
    #[error("{message}")]
    BadCredentials { message: String },

    /// Missing, invalid, or expired bearer token
    ///
    /// Responds 401 with an empty body.
    #[error("authentication required")]
    Unauthenticated,

    /// Entry absent, or owned by a different user
    #[error("{message}")]
    NotFound { message: String },

    /// Absent search query; responds 404 per the original contract
    #[error("{message}")]
    MissingQuery { message: String },

    /// Persistence failure; the underlying message is surfaced
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Unexpected failure (hashing, token signing, filesystem)
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn bad_credentials(message: impl Into<String>) -> Self {
        Self::BadCredentials {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn missing_query(message: impl Into<String>) -> Self {
        Self::MissingQuery {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::BadCredentials { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MissingQuery { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message for the response body
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::validation("All fields are required");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "All fields are required");
    }

    #[test]
    fn test_login_failures_map_to_400() {
        assert_eq!(
            ApiError::bad_credentials("User Not found").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::bad_credentials("Password is Invalid").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_conflict_maps_to_400() {
        let error = ApiError::conflict("User already exists");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthenticated_maps_to_401() {
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::not_found("Travel journal not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_query_maps_to_404() {
        let error = ApiError::missing_query("Query is required");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_maps_to_500() {
        let error = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
