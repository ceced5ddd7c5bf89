//! Employee API - employee records over a cache-coherent service
//!
//! CRUD over a backing store with a read-through / write-through cache keyed
//! by employee id, bounded by LRU eviction and sliding TTL expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::CachedEmployeeService;
pub use tasks::spawn_cleanup_task;
