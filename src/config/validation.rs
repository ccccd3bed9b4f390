//! Configuration validation
//!
//! Every configuration section implements [`Validate`]; errors are plain
//! messages that `Config::validate` wraps into a configuration error.

use super::models::*;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

const SUPPORTED_SCHEMES: &[&str] = &["redis", "rediss", "unix", "redis+unix"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Validate for RedisConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating redis configuration");

        if self.url.is_empty() {
            return Err("Redis URL cannot be empty".to_string());
        }

        let parsed =
            url::Url::parse(&self.url).map_err(|e| format!("Invalid Redis URL: {}", e))?;
        if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
            return Err(format!(
                "Redis URL must start with one of {:?}, got {}://",
                SUPPORTED_SCHEMES,
                parsed.scheme()
            ));
        }

        if self.connection_timeout == 0 {
            return Err("Redis connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unsupported log level: {}. Supported levels: {:?}",
                self.level, LOG_LEVELS
            ));
        }
        Ok(())
    }
}
