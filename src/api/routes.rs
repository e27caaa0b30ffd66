//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_cache_handler, delete_entry_handler, get_entry_handler, health_handler,
    remove_cache_handler, set_entry_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /caches` - Create a cache instance
/// - `DELETE /caches/:id` - Remove a cache instance
/// - `PUT /caches/:id/entries/:key` - Store a value
/// - `GET /caches/:id/entries/:key` - Retrieve a value by key
/// - `DELETE /caches/:id/entries/:key` - Delete a key
/// - `GET /caches/:id/stats` - Per-instance statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/caches", post(create_cache_handler))
        .route("/caches/:id", delete(remove_cache_handler))
        .route(
            "/caches/:id/entries/:key",
            put(set_entry_handler)
                .get(get_entry_handler)
                .delete(delete_entry_handler),
        )
        .route("/caches/:id/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
