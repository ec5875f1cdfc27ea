//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: removes expired cache entries once per TTL period

mod reaper;

pub use reaper::{spawn_reap_task, MIN_SWEEP_PERIOD};
