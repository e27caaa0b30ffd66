//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Request body for creating a cache instance (POST /caches)
///
/// # Fields
/// - `capacity`: maximum number of entries the instance may hold
/// - `ttl`: lifetime in seconds applied to every entry written to it
///
/// Both must be strictly positive; the registry rejects anything else.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCacheRequest {
    /// Maximum number of entries
    pub capacity: usize,
    /// Entry lifetime in seconds
    pub ttl: u64,
}

/// Request body for storing an entry (PUT /caches/:id/entries/:key)
///
/// The value is an arbitrary JSON document, stored opaquely.
#[derive(Debug, Clone, Deserialize)]
pub struct SetEntryRequest {
    /// The value to store
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_cache_request_deserialize() {
        let json = r#"{"capacity": 100, "ttl": 60}"#;
        let req: CreateCacheRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.capacity, 100);
        assert_eq!(req.ttl, 60);
    }

    #[test]
    fn test_create_cache_request_rejects_negative() {
        let json = r#"{"capacity": -1, "ttl": 60}"#;
        assert!(serde_json::from_str::<CreateCacheRequest>(json).is_err());
    }

    #[test]
    fn test_set_entry_request_deserialize_scalar() {
        let json = r#"{"value": "hello"}"#;
        let req: SetEntryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value, json!("hello"));
    }

    #[test]
    fn test_set_entry_request_deserialize_structured() {
        let json = r#"{"value": {"count": 3, "tags": ["a", "b"]}}"#;
        let req: SetEntryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value, json!({"count": 3, "tags": ["a", "b"]}));
    }
}
