//! Cache Module
//!
//! Provides the in-memory response cache with TTL expiration by periodic
//! sweep.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use store::CacheStore;
