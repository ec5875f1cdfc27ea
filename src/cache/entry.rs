//! Cache Entry Module
//!
//! Defines the immutable record stored for each cached response.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body together with the moment it was stored.
///
/// Entries are never mutated in place; re-adding a key replaces the whole
/// entry, which also resets its age.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: Bytes,
    /// Insertion timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Bytes) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was stored, measured at `now`.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: the comparison is strict. An entry whose age is
    /// exactly `ttl` is still live and survives the sweep that observes it.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) > ttl
    }
}
