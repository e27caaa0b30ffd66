//! Cache Store Module
//!
//! Bounded key/value store with fixed-TTL expiration and expiry-order
//! eviction.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};

// == Cache Store ==
/// One bounded namespace of entries.
///
/// Capacity and TTL are fixed at creation. Writers require exclusive
/// access; `get` and `stats` take `&self` so readers can run in parallel
/// behind a shared lock.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL applied to every entry written to this store
    ttl: Duration,
    /// Performance counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store with the given capacity and per-entry TTL.
    ///
    /// Validation of `capacity > 0` and a non-zero TTL is the caller's
    /// responsibility (the registry rejects invalid configurations before
    /// a store is ever allocated).
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, stamping a fresh expiry
    /// deadline of now + TTL. Replacing recomputes the deadline rather
    /// than extending the old one.
    ///
    /// If `key` is new and the store is at capacity, exactly one existing
    /// entry is evicted first: the one with the earliest deadline. Never
    /// fails.
    pub fn set(&mut self, key: String, value: Value) {
        let is_overwrite = self.entries.contains_key(&key);

        // A new key at capacity displaces the soonest-to-expire entry
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(victim) = self.eviction_candidate() {
                self.entries.remove(&victim);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key, CacheEntry::new(value, self.ttl));
    }

    // == Get ==
    /// Retrieves the value for `key` if present and not expired.
    ///
    /// A key that was never set and a key whose entry has expired both
    /// return `None`; callers cannot tell them apart. Expired entries are
    /// not removed here (the read path holds only a shared lock); they are
    /// dropped by eviction, explicit deletes, or the expiry sweep.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes the entry for `key` if present. Deleting an absent key is
    /// a no-op.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Eviction Candidate ==
    /// Selects the entry with the earliest expiry deadline, expired
    /// entries included. Ties break to the lexicographically smallest key
    /// so the choice is deterministic.
    fn eviction_candidate(&self) -> Option<String> {
        self.entries
            .iter()
            .min_by(|(key_a, entry_a), (key_b, entry_b)| {
                entry_a
                    .expires_at
                    .cmp(&entry_b.expires_at)
                    .then_with(|| key_a.cmp(key_b))
            })
            .map(|(key, _)| key.clone())
    }

    // == Purge Expired ==
    /// Eagerly removes every expired entry.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.record_purged(count as u64);
        count
    }

    // == Stats ==
    /// Returns a snapshot of the store's counters and entry count.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
