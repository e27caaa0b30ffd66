//! Cache Registry Module
//!
//! Directory of independently configured cache instances, keyed by opaque
//! generated identifiers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

/// Shared handle to one cache instance.
///
/// Handles obtained from [`CacheRegistry::lookup`] are used without the
/// registry lock; the registry lock protects only the identifier mapping.
/// A handle stays valid after [`CacheRegistry::remove`] until it drops.
pub type StoreHandle = Arc<RwLock<CacheStore>>;

// == Cache Registry ==
/// Concurrency-safe directory mapping instance identifiers to stores.
///
/// `create` and `remove` take the map's write lock; `lookup` and
/// `handles` take the read lock, so lookups proceed in parallel. Store
/// contents are never guarded by this lock.
#[derive(Debug, Default)]
pub struct CacheRegistry {
    instances: RwLock<HashMap<String, StoreHandle>>,
}

impl CacheRegistry {
    // == Constructor ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // == Create ==
    /// Validates the configuration, allocates a store, and registers it
    /// under a freshly generated identifier.
    ///
    /// Fails with [`CacheError::InvalidConfiguration`] before any state is
    /// allocated if `capacity` is zero or `ttl` is zero. Identifiers are
    /// UUIDv4 tokens, so concurrent calls cannot collide and an identifier
    /// is never reassigned to a different store.
    pub async fn create(&self, capacity: usize, ttl: Duration) -> Result<String> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be greater than 0".to_string(),
            ));
        }
        if ttl.is_zero() {
            return Err(CacheError::InvalidConfiguration(
                "ttl must be greater than 0".to_string(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        let store = Arc::new(RwLock::new(CacheStore::new(capacity, ttl)));

        self.instances.write().await.insert(id.clone(), store);

        info!(cache_id = %id, capacity, ttl_secs = ttl.as_secs(), "Cache instance created");
        Ok(id)
    }

    // == Lookup ==
    /// Returns a shared handle to the instance named by `id`, if any.
    pub async fn lookup(&self, id: &str) -> Option<StoreHandle> {
        self.instances.read().await.get(id).cloned()
    }

    // == Remove ==
    /// Unlinks the instance named by `id`.
    ///
    /// Returns true if an instance was removed. Callers already holding a
    /// handle keep a usable store until their handle drops.
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.instances.write().await.remove(id).is_some();
        if removed {
            info!(cache_id = %id, "Cache instance removed");
        } else {
            debug!(cache_id = %id, "Remove requested for unknown cache instance");
        }
        removed
    }

    // == Handles ==
    /// Snapshots handles to every live instance, for the expiry sweeper.
    pub async fn handles(&self) -> Vec<StoreHandle> {
        self.instances.read().await.values().cloned().collect()
    }

    // == Length ==
    /// Returns the number of registered instances.
    pub async fn len(&self) -> usize {
        self.instances.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if no instances are registered.
    pub async fn is_empty(&self) -> bool {
        self.instances.read().await.is_empty()
    }
}
