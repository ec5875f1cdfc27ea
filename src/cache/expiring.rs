//! Expiring Cache Module
//!
//! Thread-safe handle over [`CacheStore`] that owns the background reaper.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::spawn_reap_task;

// == Cache ==
/// Concurrent response cache with time-based expiration.
///
/// `add` and `get` are synchronous and only block for as long as it takes to
/// acquire the internal lock. One reaper task per cache drops entries older
/// than the TTL, checking once per TTL period, so an entry can outlive its
/// TTL by up to one extra period.
///
/// The reaper stops when the cache is dropped, when [`shutdown`](Self::shutdown)
/// is awaited, or when the token passed to
/// [`with_cancellation`](Self::with_cancellation) is cancelled.
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    token: CancellationToken,
    reaper: Option<JoinHandle<()>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper with period `ttl`.
    ///
    /// A zero `ttl` is accepted: entries then expire at the first sweep,
    /// which runs every [`MIN_SWEEP_PERIOD`](crate::tasks::MIN_SWEEP_PERIOD).
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime, since the reaper is
    /// spawned onto the current one.
    pub fn new(ttl: Duration) -> Self {
        Self::with_cancellation(ttl, CancellationToken::new())
    }

    /// Creates a cache whose reaper also stops when `parent` is cancelled.
    ///
    /// Dropping or shutting down the cache never cancels `parent` itself.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn with_cancellation(ttl: Duration, parent: CancellationToken) -> Self {
        let token = parent.child_token();
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let reaper = spawn_reap_task(store.clone(), ttl, token.clone());

        Self {
            store,
            token,
            reaper: Some(reaper),
        }
    }

    // == Add ==
    /// Inserts or replaces the payload stored under `key`.
    pub fn add(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        let key = key.into();
        let payload = payload.into();
        self.store.lock().add(key, payload);
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` on a miss.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().get(key)
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.store.lock().ttl()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Returns true while the reaper task is still running.
    pub fn is_reaping(&self) -> bool {
        self.reaper
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// Entries already stored stay readable until the cache is dropped.
    pub async fn shutdown(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.reaper.take() {
            if let Err(err) = handle.await {
                debug!(error = %err, "Cache reaper ended abnormally");
            }
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.lock();
        f.debug_struct("Cache")
            .field("ttl", &store.ttl())
            .field("entries", &store.len())
            .field("reaping", &self.is_reaping())
            .finish()
    }
}
