//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest interval between sweeps; tokio intervals reject a zero period.
pub const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns a background task that sweeps expired entries out of `store`.
///
/// The task wakes every `period` (at least [`MIN_SWEEP_PERIOD`]), takes the
/// store lock just long enough to scan and drop expired entries, and goes
/// back to sleep. It exits once `token` is cancelled.
///
/// # Arguments
/// * `store` - shared reference to the cache store
/// * `period` - interval between sweeps
/// * `token` - cancels the task when triggered
///
/// # Returns
/// A JoinHandle that completes after cancellation.
///
/// # Panics
/// Panics if called outside a tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(5))));
/// let token = CancellationToken::new();
/// let handle = spawn_reap_task(store.clone(), Duration::from_secs(5), token.clone());
/// // Later, during shutdown:
/// token.cancel();
/// handle.await?;
/// ```
pub fn spawn_reap_task(
    store: Arc<Mutex<CacheStore>>,
    period: Duration,
    token: CancellationToken,
) -> JoinHandle<()> {
    let period = period.max(MIN_SWEEP_PERIOD);

    tokio::spawn(async move {
        info!(period_ms = period.as_millis() as u64, "Starting cache reaper");

        // First sweep happens one full period after start.
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let (removed, remaining) = {
                let mut guard = store.lock();
                let removed = guard.cleanup_expired();
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Cache reaper: removed expired entries");
            } else {
                debug!(remaining, "Cache reaper: no expired entries found");
            }
        }

        debug!("Cache reaper stopped");
    })
}
