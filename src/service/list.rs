//! List operations
//!
//! Values are generic over the client's own argument and reply conversions,
//! so strings, numbers and byte vectors all go through unchanged.

use super::RedisService;
use super::expiry::blocking_timeout;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::{AsyncCommands, FromRedisValue, ToRedisArgs};
use std::time::Duration;

/// Operations on lists
#[async_trait]
pub trait ListOperations: Send + Sync {
    /// Push `value` onto the head; returns the new length
    async fn l_push<V>(&self, key: &str, value: V) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Pop from the head
    async fn l_pop<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: FromRedisValue + Send;

    /// Pop from the head, waiting up to `timeout` for an element
    ///
    /// A zero timeout waits indefinitely. The wait runs on its own connection,
    /// so other calls on the service are not held up.
    async fn bl_pop<V>(&self, key: &str, timeout: Duration) -> Result<Option<V>>
    where
        V: FromRedisValue + Send;

    /// Push every value onto the head in turn: `a b c` ends up as `c b a`
    ///
    /// Returns the new length, or 0 when `values` is empty and nothing was sent.
    async fn l_push_all<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Push `value` onto the tail; returns the new length
    async fn r_push<V>(&self, key: &str, value: V) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Pop from the tail
    async fn r_pop<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: FromRedisValue + Send;

    /// Pop from the tail, waiting up to `timeout` for an element
    async fn br_pop<V>(&self, key: &str, timeout: Duration) -> Result<Option<V>>
    where
        V: FromRedisValue + Send;

    /// Push every value onto the tail in turn: `a b c` stays `a b c`
    ///
    /// Returns the new length, or 0 when `values` is empty and nothing was sent.
    async fn r_push_all<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Element at `index` without removing it; negative indexes count from the tail
    async fn l_index<V>(&self, key: &str, index: i64) -> Result<Option<V>>
    where
        V: FromRedisValue + Send;

    /// Length of the list
    async fn l_size(&self, key: &str) -> Result<u64>;

    /// Remove up to `count` occurrences of `value`
    ///
    /// Positive counts scan from the head, negative from the tail, zero removes all.
    async fn l_remove<V>(&self, key: &str, count: i64, value: V) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Pop the tail of `source` and push it onto the head of `destination`
    async fn r_pop_l_push<V>(&self, source: &str, destination: &str) -> Result<Option<V>>
    where
        V: FromRedisValue + Send;
}

#[async_trait]
impl ListOperations for RedisService {
    async fn l_push<V>(&self, key: &str, value: V) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let Some(mut conn) = self.connection("LPUSH", key) else {
            return Ok(0);
        };
        let len: u64 = conn.lpush(key, value).await?;
        Ok(len)
    }

    async fn l_pop<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.connection("LPOP", key) else {
            return Ok(None);
        };
        let value: Option<V> = conn.lpop(key, None).await?;
        Ok(value)
    }

    async fn bl_pop<V>(&self, key: &str, timeout: Duration) -> Result<Option<V>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.dedicated_connection("BLPOP", key).await? else {
            return Ok(None);
        };
        // Reply is [list, element], or nil on timeout
        let popped: Option<(String, V)> = conn.blpop(key, blocking_timeout(timeout)).await?;
        Ok(popped.map(|(_, value)| value))
    }

    async fn l_push_all<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        if values.is_empty() {
            return Ok(0);
        }
        let Some(mut conn) = self.connection("LPUSH", key) else {
            return Ok(0);
        };
        let len: u64 = conn.lpush(key, values).await?;
        Ok(len)
    }

    async fn r_push<V>(&self, key: &str, value: V) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let Some(mut conn) = self.connection("RPUSH", key) else {
            return Ok(0);
        };
        let len: u64 = conn.rpush(key, value).await?;
        Ok(len)
    }

    async fn r_pop<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.connection("RPOP", key) else {
            return Ok(None);
        };
        let value: Option<V> = conn.rpop(key, None).await?;
        Ok(value)
    }

    async fn br_pop<V>(&self, key: &str, timeout: Duration) -> Result<Option<V>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.dedicated_connection("BRPOP", key).await? else {
            return Ok(None);
        };
        let popped: Option<(String, V)> = conn.brpop(key, blocking_timeout(timeout)).await?;
        Ok(popped.map(|(_, value)| value))
    }

    async fn r_push_all<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        if values.is_empty() {
            return Ok(0);
        }
        let Some(mut conn) = self.connection("RPUSH", key) else {
            return Ok(0);
        };
        let len: u64 = conn.rpush(key, values).await?;
        Ok(len)
    }

    async fn l_index<V>(&self, key: &str, index: i64) -> Result<Option<V>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.connection("LINDEX", key) else {
            return Ok(None);
        };
        let value: Option<V> = conn.lindex(key, index as isize).await?;
        Ok(value)
    }

    async fn l_size(&self, key: &str) -> Result<u64> {
        let Some(mut conn) = self.connection("LLEN", key) else {
            return Ok(0);
        };
        let len: u64 = conn.llen(key).await?;
        Ok(len)
    }

    async fn l_remove<V>(&self, key: &str, count: i64, value: V) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let Some(mut conn) = self.connection("LREM", key) else {
            return Ok(0);
        };
        let removed: u64 = conn.lrem(key, count as isize, value).await?;
        Ok(removed)
    }

    async fn r_pop_l_push<V>(&self, source: &str, destination: &str) -> Result<Option<V>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.connection("RPOPLPUSH", source) else {
            return Ok(None);
        };
        let value: Option<V> = conn.rpoplpush(source, destination).await?;
        Ok(value)
    }
}
