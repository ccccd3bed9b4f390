//! Redis connection pool and core connection management
//!
//! One multiplexed connection is opened per pool and cloned for every
//! command; the client pipelines concurrent requests over it. Blocking
//! commands get a connection of their own for the duration of the call.

use crate::config::RedisConfig;
use crate::utils::error::{FacadeError, Result};
use redis::{Client, aio::MultiplexedConnection};
use tracing::{debug, info};

/// Redis connection pool (supports a disabled mode without any connection)
#[derive(Clone)]
pub struct RedisPool {
    /// Redis client (None when disabled)
    client: Option<Client>,
    /// Shared connection (None when disabled)
    connection: Option<MultiplexedConnection>,
    /// Configuration
    config: RedisConfig,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("url", &Self::sanitize_url(&self.config.url))
            .field("disabled", &self.is_disabled())
            .finish()
    }
}

impl RedisPool {
    /// Create a new Redis pool
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating Redis connection pool");
        debug!("Redis URL: {}", Self::sanitize_url(&config.url));

        let client = Client::open(config.url.as_str())?;
        let connection = Self::open_connection(&client, config).await?;

        info!("Redis connection pool created successfully");
        Ok(Self {
            client: Some(client),
            connection: Some(connection),
            config: config.clone(),
        })
    }

    async fn open_connection(
        client: &Client,
        config: &RedisConfig,
    ) -> Result<MultiplexedConnection> {
        let connection = tokio::time::timeout(
            config.connect_timeout(),
            client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| {
            FacadeError::timeout(format!(
                "Connecting to {} took longer than {}s",
                Self::sanitize_url(&config.url),
                config.connection_timeout
            ))
        })??;
        Ok(connection)
    }

    /// Create a disabled pool; every operation answers its neutral value
    pub fn create_disabled() -> Self {
        Self::disabled(RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        })
    }

    fn disabled(config: RedisConfig) -> Self {
        info!("Creating disabled Redis pool");
        Self {
            client: None,
            connection: None,
            config,
        }
    }

    /// Connect when the configuration enables Redis, otherwise stay disabled
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        if config.enabled {
            Self::new(config).await
        } else {
            debug!("Redis disabled, skipping Redis connection");
            Ok(Self::disabled(config.clone()))
        }
    }

    /// Check if this pool has no connection
    pub fn is_disabled(&self) -> bool {
        self.connection.is_none()
    }

    /// Configuration the pool was built from
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    /// Underlying client, if connected
    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    /// Handle on the shared connection, None when disabled
    pub fn connection(&self) -> Option<MultiplexedConnection> {
        self.connection.clone()
    }

    /// Fresh connection for a command that holds its connection until it returns
    ///
    /// Redis serves a connection's commands in order, so anything queued
    /// behind a blocking pop waits with it. None when disabled.
    pub async fn dedicated_connection(&self) -> Result<Option<MultiplexedConnection>> {
        let Some(client) = &self.client else {
            return Ok(None);
        };
        let connection = Self::open_connection(client, &self.config).await?;
        Ok(Some(connection))
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        let Some(mut conn) = self.connection() else {
            debug!("Redis health check skipped (disabled)");
            return Ok(());
        };

        debug!("Performing Redis health check");
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        debug!("Redis health check passed");
        Ok(())
    }

    /// Server information as reported by INFO
    pub async fn info(&self) -> Result<String> {
        let Some(mut conn) = self.connection() else {
            return Ok("Redis unavailable (disabled)".to_string());
        };

        let info: String = redis::cmd("INFO").query_async(&mut conn).await?;
        Ok(info)
    }

    /// Close the connection pool
    pub async fn close(&self) -> Result<()> {
        info!("Closing Redis connection pool");
        // The multiplexed connection shuts down once its last handle is dropped
        info!("Redis connection pool closed");
        Ok(())
    }

    /// Sanitize Redis URL for logging (hide password)
    pub fn sanitize_url(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url) {
            let mut sanitized = parsed.clone();
            if sanitized.password().is_some() {
                let _ = sanitized.set_password(Some("***"));
            }
            sanitized.to_string()
        } else {
            "invalid_url".to_string()
        }
    }
}
