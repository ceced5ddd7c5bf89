//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of employees the cache can hold
    pub max_entries: usize,
    /// Idle seconds after which a cache entry expires
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
    /// Basic auth user name
    pub auth_username: String,
    /// Basic auth password
    pub auth_password: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 200)
    /// - `CACHE_TTL` - Idle expiry in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 30)
    /// - `AUTH_USERNAME` / `AUTH_PASSWORD` - Basic auth credentials (default: admin/admin)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            auth_username: env::var("AUTH_USERNAME").unwrap_or(defaults.auth_username),
            auth_password: env::var("AUTH_PASSWORD").unwrap_or(defaults.auth_password),
        }
    }

    /// Cache idle ttl as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 200,
            cache_ttl: 60,
            server_port: 8080,
            cleanup_interval: 30,
            auth_username: "admin".to_string(),
            auth_password: "admin".to_string(),
        }
    }
}
