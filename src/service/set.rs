//! Set operations

use super::RedisService;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::{AsyncCommands, FromRedisValue, ToRedisArgs};
use std::collections::HashSet;
use std::hash::Hash;

/// Operations on sets
#[async_trait]
pub trait SetOperations: Send + Sync {
    /// Add members; returns how many were not already present
    async fn s_add<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Members of `key1` that are not in `key2`
    async fn s_diff<V>(&self, key1: &str, key2: &str) -> Result<HashSet<V>>
    where
        V: FromRedisValue + Eq + Hash + Send;

    /// Store `key1 - key2` at `destination`; returns its size
    async fn s_diff_store(&self, key1: &str, key2: &str, destination: &str) -> Result<u64>;

    /// Members of either set
    async fn s_union<V>(&self, key1: &str, key2: &str) -> Result<HashSet<V>>
    where
        V: FromRedisValue + Eq + Hash + Send;

    /// Store the union at `destination`; returns its size
    async fn s_union_store(&self, key1: &str, key2: &str, destination: &str) -> Result<u64>;

    /// Members of both sets
    async fn s_inter<V>(&self, key1: &str, key2: &str) -> Result<HashSet<V>>
    where
        V: FromRedisValue + Eq + Hash + Send;

    /// Store the intersection at `destination`; returns its size
    async fn s_inter_store(&self, key1: &str, key2: &str, destination: &str) -> Result<u64>;

    /// Remove members; returns how many were removed
    async fn s_remove<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Up to `count` distinct random members
    async fn s_random_distinct<V>(&self, key: &str, count: u64) -> Result<Vec<V>>
    where
        V: FromRedisValue + Send;

    /// Move `value` from `source` to `destination`; false when it was not in `source`
    async fn s_move<V>(&self, source: &str, value: V, destination: &str) -> Result<bool>
    where
        V: ToRedisArgs + Send + Sync;

    /// Number of members
    async fn s_size(&self, key: &str) -> Result<u64>;

    /// Whether `value` is a member
    async fn s_is_member<V>(&self, key: &str, value: V) -> Result<bool>
    where
        V: ToRedisArgs + Send + Sync;

    /// All members
    async fn s_members<V>(&self, key: &str) -> Result<HashSet<V>>
    where
        V: FromRedisValue + Eq + Hash + Send;
}

#[async_trait]
impl SetOperations for RedisService {
    async fn s_add<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        if values.is_empty() {
            return Ok(0);
        }
        let Some(mut conn) = self.connection("SADD", key) else {
            return Ok(0);
        };
        let added: u64 = conn.sadd(key, values).await?;
        Ok(added)
    }

    async fn s_diff<V>(&self, key1: &str, key2: &str) -> Result<HashSet<V>>
    where
        V: FromRedisValue + Eq + Hash + Send,
    {
        let Some(mut conn) = self.connection("SDIFF", key1) else {
            return Ok(HashSet::new());
        };
        let members: HashSet<V> = conn.sdiff(&[key1, key2][..]).await?;
        Ok(members)
    }

    async fn s_diff_store(&self, key1: &str, key2: &str, destination: &str) -> Result<u64> {
        let Some(mut conn) = self.connection("SDIFFSTORE", destination) else {
            return Ok(0);
        };
        let size: u64 = conn.sdiffstore(destination, &[key1, key2][..]).await?;
        Ok(size)
    }

    async fn s_union<V>(&self, key1: &str, key2: &str) -> Result<HashSet<V>>
    where
        V: FromRedisValue + Eq + Hash + Send,
    {
        let Some(mut conn) = self.connection("SUNION", key1) else {
            return Ok(HashSet::new());
        };
        let members: HashSet<V> = conn.sunion(&[key1, key2][..]).await?;
        Ok(members)
    }

    async fn s_union_store(&self, key1: &str, key2: &str, destination: &str) -> Result<u64> {
        let Some(mut conn) = self.connection("SUNIONSTORE", destination) else {
            return Ok(0);
        };
        let size: u64 = conn.sunionstore(destination, &[key1, key2][..]).await?;
        Ok(size)
    }

    async fn s_inter<V>(&self, key1: &str, key2: &str) -> Result<HashSet<V>>
    where
        V: FromRedisValue + Eq + Hash + Send,
    {
        let Some(mut conn) = self.connection("SINTER", key1) else {
            return Ok(HashSet::new());
        };
        let members: HashSet<V> = conn.sinter(&[key1, key2][..]).await?;
        Ok(members)
    }

    async fn s_inter_store(&self, key1: &str, key2: &str, destination: &str) -> Result<u64> {
        let Some(mut conn) = self.connection("SINTERSTORE", destination) else {
            return Ok(0);
        };
        let size: u64 = conn.sinterstore(destination, &[key1, key2][..]).await?;
        Ok(size)
    }

    async fn s_remove<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        if values.is_empty() {
            return Ok(0);
        }
        let Some(mut conn) = self.connection("SREM", key) else {
            return Ok(0);
        };
        let removed: u64 = conn.srem(key, values).await?;
        Ok(removed)
    }

    async fn s_random_distinct<V>(&self, key: &str, count: u64) -> Result<Vec<V>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.connection("SRANDMEMBER", key) else {
            return Ok(Vec::new());
        };
        // A positive count never repeats a member
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        let members: Vec<V> = conn.srandmember_multiple(key, count).await?;
        Ok(members)
    }

    async fn s_move<V>(&self, source: &str, value: V, destination: &str) -> Result<bool>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let Some(mut conn) = self.connection("SMOVE", source) else {
            return Ok(false);
        };
        let moved: bool = conn.smove(source, destination, value).await?;
        Ok(moved)
    }

    async fn s_size(&self, key: &str) -> Result<u64> {
        let Some(mut conn) = self.connection("SCARD", key) else {
            return Ok(0);
        };
        let size: u64 = conn.scard(key).await?;
        Ok(size)
    }

    async fn s_is_member<V>(&self, key: &str, value: V) -> Result<bool>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let Some(mut conn) = self.connection("SISMEMBER", key) else {
            return Ok(false);
        };
        let is_member: bool = conn.sismember(key, value).await?;
        Ok(is_member)
    }

    async fn s_members<V>(&self, key: &str) -> Result<HashSet<V>>
    where
        V: FromRedisValue + Eq + Hash + Send,
    {
        let Some(mut conn) = self.connection("SMEMBERS", key) else {
            return Ok(HashSet::new());
        };
        let members: HashSet<V> = conn.smembers(key).await?;
        Ok(members)
    }
}
