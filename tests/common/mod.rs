//! Common test utilities for redis-facade
//!
//! - Unique key names so parallel tests never share state
//! - A live service built from `REDIS_URL`
//! - An in-process RESP server for tests without a real Redis


use redis_facade::RedisService;
use redis_facade::config::RedisConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static KEY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// A key no other test run will use
pub fn unique_key(name: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seq = KEY_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!(
        "redis-facade-test:{}:{}:{}:{}",
        std::process::id(),
        nanos,
        seq,
        name
    )
}

/// Service connected to the server named by `REDIS_URL`
pub async fn live_service() -> RedisService {
    let url = std::env::var("REDIS_URL").expect("REDIS_URL must be set for e2e tests");
    let config = RedisConfig {
        url,
        ..RedisConfig::default()
    };
    RedisService::connect(&config)
        .await
        .expect("Failed to connect to Redis")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_keys_differ() {
        let a = unique_key("same");
        let b = unique_key("same");
        assert_ne!(a, b);
        assert!(a.ends_with(":same"));
    }
}
