/**
 * Error Conversion
 *
 * Converts `ApiError` values into HTTP responses at the request boundary.
 *
 * # Response Format
 *
 * Errors respond as JSON:
 * ```json
 * {
 *   "error": true,
 *   "message": "Travel journal not found"
 * }
 * ```
 *
 * `Unauthenticated` is the exception: it responds with a bare 401 and no
 * body, matching the original contract's `sendStatus(401)`.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if matches!(self, ApiError::Unauthenticated) {
            return status.into_response();
        }

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": true,
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let response = ApiError::validation("All fields are required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_unauthenticated_has_no_body() {
        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get("content-type").is_none());
    }
}
