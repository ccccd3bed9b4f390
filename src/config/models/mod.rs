//! Configuration data models
//!
//! This module defines all configuration structures used by the facade.

pub mod logging;
pub mod redis;

// Re-export all configuration types
pub use self::logging::*;
pub use self::redis::*;

/// Default Redis URL
pub fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

/// Redis is enabled unless switched off
pub fn default_redis_enabled() -> bool {
    true
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
