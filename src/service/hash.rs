//! Hash operations

use super::RedisService;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::collections::{HashMap, HashSet};

/// Operations on hash fields
#[async_trait]
pub trait HashOperations: Send + Sync {
    /// Set `field` of the hash at `key`
    async fn h_set(&self, key: &str, field: &str, value: &str) -> Result<()>;

    /// Set `field` only if it is not present yet
    async fn h_set_nx(&self, key: &str, field: &str, value: &str) -> Result<bool>;

    /// Value of `field`, `None` when the field or the hash is missing
    async fn h_get(&self, key: &str, field: &str) -> Result<Option<String>>;

    /// Set several fields, overwriting the ones already present
    async fn multi_h_set(&self, key: &str, values: &HashMap<String, String>) -> Result<()>;

    /// Delete fields; returns how many were removed
    async fn h_del(&self, key: &str, fields: &[&str]) -> Result<u64>;

    /// Whether `field` exists in the hash
    async fn h_exist(&self, key: &str, field: &str) -> Result<bool>;

    /// All fields and values of the hash
    async fn get_h_entries(&self, key: &str) -> Result<HashMap<String, String>>;

    /// All field names of the hash
    async fn get_h_keys(&self, key: &str) -> Result<HashSet<String>>;

    /// Number of fields in the hash
    async fn h_size(&self, key: &str) -> Result<u64>;
}

#[async_trait]
impl HashOperations for RedisService {
    async fn h_set(&self, key: &str, field: &str, value: &str) -> Result<()> {
        let Some(mut conn) = self.connection("HSET", key) else {
            return Ok(());
        };
        let _: () = conn.hset(key, field, value).await?;
        Ok(())
    }

    async fn h_set_nx(&self, key: &str, field: &str, value: &str) -> Result<bool> {
        let Some(mut conn) = self.connection("HSETNX", key) else {
            return Ok(false);
        };
        let written: bool = conn.hset_nx(key, field, value).await?;
        Ok(written)
    }

    async fn h_get(&self, key: &str, field: &str) -> Result<Option<String>> {
        let Some(mut conn) = self.connection("HGET", key) else {
            return Ok(None);
        };
        let value: Option<String> = conn.hget(key, field).await?;
        Ok(value)
    }

    async fn multi_h_set(&self, key: &str, values: &HashMap<String, String>) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        let Some(mut conn) = self.connection("HSET", key) else {
            return Ok(());
        };
        let items: Vec<(&str, &str)> = values
            .iter()
            .map(|(f, v)| (f.as_str(), v.as_str()))
            .collect();
        let _: () = conn.hset_multiple(key, &items).await?;
        Ok(())
    }

    async fn h_del(&self, key: &str, fields: &[&str]) -> Result<u64> {
        if fields.is_empty() {
            return Ok(0);
        }
        let Some(mut conn) = self.connection("HDEL", key) else {
            return Ok(0);
        };
        let removed: u64 = conn.hdel(key, fields).await?;
        Ok(removed)
    }

    async fn h_exist(&self, key: &str, field: &str) -> Result<bool> {
        let Some(mut conn) = self.connection("HEXISTS", key) else {
            return Ok(false);
        };
        let exists: bool = conn.hexists(key, field).await?;
        Ok(exists)
    }

    async fn get_h_entries(&self, key: &str) -> Result<HashMap<String, String>> {
        let Some(mut conn) = self.connection("HGETALL", key) else {
            return Ok(HashMap::new());
        };
        let entries: HashMap<String, String> = conn.hgetall(key).await?;
        Ok(entries)
    }

    async fn get_h_keys(&self, key: &str) -> Result<HashSet<String>> {
        let Some(mut conn) = self.connection("HKEYS", key) else {
            return Ok(HashSet::new());
        };
        let fields: HashSet<String> = conn.hkeys(key).await?;
        Ok(fields)
    }

    async fn h_size(&self, key: &str) -> Result<u64> {
        let Some(mut conn) = self.connection("HLEN", key) else {
            return Ok(0);
        };
        let len: u64 = conn.hlen(key).await?;
        Ok(len)
    }
}
