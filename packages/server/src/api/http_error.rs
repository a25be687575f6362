//! HTTP error handling
//!
//! One boundary error type for the whole API. Every failure, whatever the
//! route, serializes to the flat `{"error": "<description>"}` payload clients
//! already parse.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// API operation errors, mapped to status codes by `IntoResponse`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested task does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Request was well-formed JSON but semantically invalid (400)
    #[error("{0}")]
    Validation(String),

    /// Anything else, including unparseable request bodies (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (ApiError::not_found("missing"), StatusCode::NOT_FOUND),
            (ApiError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                ApiError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_error_message_passthrough() {
        let error = ApiError::validation("Title is required");
        assert_eq!(error.to_string(), "Title is required");
    }
}
