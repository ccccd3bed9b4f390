//! String value operations

use super::RedisService;
use super::expiry::Expiry;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::{AsyncCommands, ExistenceCheck, SetOptions, Value};
use std::collections::HashMap;
use std::time::Duration;

/// Operations on string values
#[async_trait]
pub trait ValueOperations: Send + Sync {
    /// Set `key` to `value`, replacing any existing value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Value of `key`, `None` when the key does not exist
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set `key` to `value` with a time-to-live
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Set `key` only if it does not exist; true when the value was written
    async fn set_nx(&self, key: &str, value: &str) -> Result<bool>;

    /// Set `key` with a time-to-live, only if it does not exist
    async fn set_nx_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<bool>;

    /// Set several keys at once
    async fn multi_set(&self, values: &HashMap<String, String>) -> Result<()>;

    /// Set several keys only if none of them exists
    ///
    /// Nothing is written when any key is already present.
    async fn multi_set_nx(&self, values: &HashMap<String, String>) -> Result<bool>;
}

fn pairs(values: &HashMap<String, String>) -> Vec<(&str, &str)> {
    values
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[async_trait]
impl ValueOperations for RedisService {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let Some(mut conn) = self.connection("SET", key) else {
            return Ok(());
        };
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let Some(mut conn) = self.connection("GET", key) else {
            return Ok(None);
        };
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let Some(mut conn) = self.connection("SETEX", key) else {
            return Ok(());
        };
        let _: () = match Expiry::from_duration(ttl) {
            Expiry::Seconds(secs) => conn.set_ex(key, value, secs).await?,
            Expiry::Milliseconds(millis) => conn.pset_ex(key, value, millis).await?,
        };
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool> {
        let Some(mut conn) = self.connection("SETNX", key) else {
            return Ok(false);
        };
        let written: bool = conn.set_nx(key, value).await?;
        Ok(written)
    }

    async fn set_nx_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        let Some(mut conn) = self.connection("SET NX", key) else {
            return Ok(false);
        };
        let options = SetOptions::default()
            .conditional_set(ExistenceCheck::NX)
            .with_expiration(Expiry::from_duration(ttl).into());
        // OK when written, nil when the key already existed
        let reply: Value = conn.set_options(key, value, options).await?;
        Ok(!matches!(reply, Value::Nil))
    }

    async fn multi_set(&self, values: &HashMap<String, String>) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        let Some(mut conn) = self.connection("MSET", "*") else {
            return Ok(());
        };
        let _: () = conn.mset(&pairs(values)).await?;
        Ok(())
    }

    async fn multi_set_nx(&self, values: &HashMap<String, String>) -> Result<bool> {
        if values.is_empty() {
            return Ok(true);
        }
        let Some(mut conn) = self.connection("MSETNX", "*") else {
            return Ok(false);
        };
        let written: bool = conn.mset_nx(&pairs(values)).await?;
        Ok(written)
    }
}
