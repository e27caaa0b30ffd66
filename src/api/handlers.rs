//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. Handlers only
//! translate between the wire and the core: parameters go in, core
//! results and errors come out as JSON.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{CacheError, Result};
use crate::models::{
    CreateCacheRequest, CreateCacheResponse, DeleteResponse, GetResponse, HealthResponse,
    RemoveCacheResponse, SetEntryRequest, SetResponse, StatsResponse,
};
use crate::registry::{CacheRegistry, StoreHandle};

/// Application state shared across all handlers.
///
/// Holds the cache registry; individual stores are reached through
/// registry lookups, never through this struct directly.
#[derive(Clone, Default)]
pub struct AppState {
    /// The instance directory
    pub registry: Arc<CacheRegistry>,
}

impl AppState {
    /// Creates an AppState with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolves an instance identifier to a store handle.
async fn lookup_store(state: &AppState, id: &str) -> Result<StoreHandle> {
    state
        .registry
        .lookup(id)
        .await
        .ok_or_else(|| CacheError::CacheNotFound(id.to_string()))
}

/// Handler for POST /caches
///
/// Creates a cache instance with the requested capacity and TTL and
/// returns its generated identifier.
pub async fn create_cache_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCacheRequest>,
) -> Result<(StatusCode, Json<CreateCacheResponse>)> {
    let id = state
        .registry
        .create(req.capacity, Duration::from_secs(req.ttl))
        .await?;

    Ok((StatusCode::CREATED, Json(CreateCacheResponse::new(id))))
}

/// Handler for DELETE /caches/:id
///
/// Removes a cache instance from the registry.
pub async fn remove_cache_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveCacheResponse>> {
    if state.registry.remove(&id).await {
        Ok(Json(RemoveCacheResponse::new(id)))
    } else {
        Err(CacheError::CacheNotFound(id))
    }
}

/// Handler for PUT /caches/:id/entries/:key
///
/// Stores a value under `key` in the addressed instance.
pub async fn set_entry_handler(
    State(state): State<AppState>,
    Path((id, key)): Path<(String, String)>,
    Json(req): Json<SetEntryRequest>,
) -> Result<Json<SetResponse>> {
    let store = lookup_store(&state, &id).await?;

    store.write().await.set(key.clone(), req.value);

    Ok(Json(SetResponse::new(key)))
}

/// Handler for GET /caches/:id/entries/:key
///
/// Retrieves a value by key. Absent and expired keys are
/// indistinguishable; both answer 404.
pub async fn get_entry_handler(
    State(state): State<AppState>,
    Path((id, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    let store = lookup_store(&state, &id).await?;

    // Read lock only: lookups run concurrently with each other
    let value = store.read().await.get(&key);

    match value {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::KeyNotFound(key)),
    }
}

/// Handler for DELETE /caches/:id/entries/:key
///
/// Deletes a key from the addressed instance. Deleting an absent key
/// succeeds.
pub async fn delete_entry_handler(
    State(state): State<AppState>,
    Path((id, key)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    let store = lookup_store(&state, &id).await?;

    store.write().await.delete(&key);

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for GET /caches/:id/stats
///
/// Returns the statistics snapshot for one instance.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatsResponse>> {
    let store = lookup_store(&state, &id).await?;

    let snapshot = store.read().await.stats();

    Ok(Json(StatsResponse::from(snapshot)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
