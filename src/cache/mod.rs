//! Cache Module
//!
//! In-memory employee cache with sliding TTL expiration and LRU eviction.

mod employee_cache;
mod entry;
mod lru;
mod stats;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

// Re-export public types
pub use employee_cache::EmployeeCache;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;

// == Public Constants ==
/// Default maximum number of cached employees
pub const DEFAULT_MAX_ENTRIES: usize = 200;

/// Default idle time after which an entry expires
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);
