//! Redis connection configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Redis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL (`redis://`, `rediss://` or `unix://`)
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Enable Redis (if false, every operation answers its neutral value)
    #[serde(default = "default_redis_enabled")]
    pub enabled: bool,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            enabled: default_redis_enabled(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl RedisConfig {
    /// Connection timeout as a duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }

    /// Merge Redis configurations (non-default values of `other` win)
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_redis_url() {
            self.url = other.url;
        }
        if !other.enabled {
            self.enabled = false;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        self
    }
}
