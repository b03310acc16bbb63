//! Error types for the address book cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations and the admin API.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Empty company/customer, zero TTL, or a malformed request body
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Nothing cached under the requested key
    #[error("Not found: {0}")]
    NotFound(String),

    /// The path named a cache kind the registry does not hold
    #[error("Unknown cache: {0}")]
    UnknownCache(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// Shorthand for the error every key and TTL check produces.
    pub fn invalid(msg: impl Into<String>) -> Self {
        CacheError::InvalidArgument(msg.into())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) | CacheError::UnknownCache(_) => StatusCode::NOT_FOUND,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (CacheError::invalid("x"), StatusCode::BAD_REQUEST),
            (CacheError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (CacheError::UnknownCache("x".into()), StatusCode::NOT_FOUND),
            (CacheError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_display_includes_message() {
        let err = CacheError::invalid("company must not be empty");
        assert_eq!(err.to_string(), "Invalid argument: company must not be empty");
    }
}
