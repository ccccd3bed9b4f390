//! Configuration management for the facade
//!
//! Configuration comes from a YAML file, environment variables, or both
//! (environment wins).

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{FacadeError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Redis connection settings
    #[serde(default)]
    pub redis: RedisConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FacadeError::config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML document without validating it
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| FacadeError::config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides
    ///
    /// Validation runs once, on the merged result, so the environment can
    /// repair a bad value in the file.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let config = Self::load_unvalidated(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), leaving validation to the caller
    ///
    /// For callers that apply further overrides before validating.
    pub async fn load_unvalidated(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read_file(path).await?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `REDIS_*` and `LOG_*` environment variables
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var("REDIS_URL") {
            self.redis.url = url;
        }
        if let Ok(enabled) = env::var("REDIS_ENABLED") {
            self.redis.enabled = enabled
                .parse()
                .map_err(|e| FacadeError::config(format!("Invalid REDIS_ENABLED: {}", e)))?;
        }
        if let Ok(timeout) = env::var("REDIS_CONNECTION_TIMEOUT") {
            self.redis.connection_timeout = timeout.parse().map_err(|e| {
                FacadeError::config(format!("Invalid REDIS_CONNECTION_TIMEOUT: {}", e))
            })?;
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            self.logging.format = format.parse().map_err(FacadeError::Config)?;
        }
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.redis
            .validate()
            .map_err(|e| FacadeError::config(format!("Redis config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| FacadeError::config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.redis = self.redis.merge(other.redis);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| FacadeError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
