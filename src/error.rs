//! Error types for the cache service
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
/// Unified error type for the cache service.
///
/// Every variant is a recoverable, request-local outcome; none is fatal
/// to the process. A key that is absent or expired is not an error in the
/// core (`CacheStore::get` returns `Option`), so `KeyNotFound` exists
/// only for the transport layer's rendering of that outcome.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity or TTL not strictly positive at instance creation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Identifier does not name any cache instance
    #[error("Cache not found: {0}")]
    CacheNotFound(String),

    /// Key absent (never set, deleted, evicted, or expired)
    #[error("Key not found: {0}")]
    KeyNotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidConfiguration(_) => StatusCode::BAD_REQUEST,
            CacheError::CacheNotFound(_) => StatusCode::NOT_FOUND,
            CacheError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;
