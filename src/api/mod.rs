//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `POST /caches` - Create a cache instance
//! - `DELETE /caches/:id` - Remove a cache instance
//! - `PUT /caches/:id/entries/:key` - Store a value
//! - `GET /caches/:id/entries/:key` - Retrieve a value by key
//! - `DELETE /caches/:id/entries/:key` - Delete a key
//! - `GET /caches/:id/stats` - Per-instance statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
