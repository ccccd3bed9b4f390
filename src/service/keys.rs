//! Key lifetime and existence operations

use super::RedisService;
use super::expiry::Expiry;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::Duration;

/// Operations on keys regardless of the type stored under them
#[async_trait]
pub trait KeyOperations: Send + Sync {
    /// Give `key` a time-to-live; false when the key does not exist
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool>;

    /// Remove the time-to-live of `key`, making it permanent
    async fn persist(&self, key: &str) -> Result<bool>;

    /// Remaining time-to-live in seconds
    ///
    /// `-1` when the key has no expiry, `-2` when it does not exist.
    async fn get_expire(&self, key: &str) -> Result<i64>;

    /// Delete `key`; true when something was removed
    async fn del(&self, key: &str) -> Result<bool>;

    /// Whether `key` exists
    async fn exist(&self, key: &str) -> Result<bool>;

    /// Rename `key` to `new_key`
    ///
    /// An existing `new_key` is overwritten; check it with [`exist`](Self::exist)
    /// first when that matters.
    async fn rename(&self, key: &str, new_key: &str) -> Result<()>;
}

#[async_trait]
impl KeyOperations for RedisService {
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let Some(mut conn) = self.connection("EXPIRE", key) else {
            return Ok(false);
        };
        let expiry = Expiry::from_duration(ttl);
        let applied: bool = match expiry {
            Expiry::Seconds(_) => conn.expire(key, expiry.signed_amount()).await?,
            Expiry::Milliseconds(_) => conn.pexpire(key, expiry.signed_amount()).await?,
        };
        Ok(applied)
    }

    async fn persist(&self, key: &str) -> Result<bool> {
        let Some(mut conn) = self.connection("PERSIST", key) else {
            return Ok(false);
        };
        let removed: bool = conn.persist(key).await?;
        Ok(removed)
    }

    async fn get_expire(&self, key: &str) -> Result<i64> {
        let Some(mut conn) = self.connection("TTL", key) else {
            return Ok(-2); // Key does not exist
        };
        let ttl: i64 = conn.ttl(key).await?;
        Ok(ttl)
    }

    async fn del(&self, key: &str) -> Result<bool> {
        let Some(mut conn) = self.connection("DEL", key) else {
            return Ok(false);
        };
        let removed: u64 = conn.del(key).await?;
        Ok(removed > 0)
    }

    async fn exist(&self, key: &str) -> Result<bool> {
        let Some(mut conn) = self.connection("EXISTS", key) else {
            return Ok(false);
        };
        let exists: bool = conn.exists(key).await?;
        Ok(exists)
    }

    async fn rename(&self, key: &str, new_key: &str) -> Result<()> {
        let Some(mut conn) = self.connection("RENAME", key) else {
            return Ok(());
        };
        let _: () = conn.rename(key, new_key).await?;
        Ok(())
    }
}
