//! Request and Response models for the cache service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateCacheRequest, SetEntryRequest};
pub use responses::{
    CreateCacheResponse, DeleteResponse, ErrorResponse, GetResponse, HealthResponse,
    RemoveCacheResponse, SetResponse, StatsResponse,
};
