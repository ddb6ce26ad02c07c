//! Error types for the key-value server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the key-value server.
///
/// An absent key and an expired key are both reported as `NotFound`; callers
/// can never tell the two apart.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key is absent or has expired
    #[error("Key not found or expired: {0}")]
    NotFound(String),

    /// Request failed validation before reaching the store
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CacheError {
    /// Maps the error to its HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// Malformed or non-JSON bodies surface as validation errors.
impl From<JsonRejection> for CacheError {
    fn from(rejection: JsonRejection) -> Self {
        CacheError::InvalidArgument(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the key-value server.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (CacheError::NotFound("key".to_string()), StatusCode::NOT_FOUND),
            (
                CacheError::InvalidArgument("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        let response = CacheError::NotFound("missing".to_string()).into_response();

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.contains("application/json"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Key not found or expired: missing");
    }
}
