//! Cache Store Module
//!
//! Plain key/value storage with TTL-based sweeping. Not synchronized on its
//! own; [`Cache`](crate::cache::Cache) wraps it in a mutex.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Response storage keyed by request identifier.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age after which an entry becomes eligible for removal
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Add ==
    /// Stores `payload` under `key`, replacing any previous entry and
    /// resetting its age.
    pub fn add(&mut self, key: String, payload: Bytes) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Reads never refresh an entry's age and never evict; expiry is left
    /// entirely to [`cleanup_expired`](Self::cleanup_expired).
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|entry| entry.payload.clone())
    }

    // == Cleanup Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(Instant::now())
    }

    /// Sweep variant with an explicit reference time.
    pub fn cleanup_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired_at(ttl, now));
        before - self.entries.len()
    }

    // == TTL ==
    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
