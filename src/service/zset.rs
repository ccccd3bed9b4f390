//! Sorted-set operations

use super::RedisService;
use super::types::ScoredMember;
use crate::utils::error::Result;
use async_trait::async_trait;
use redis::{AsyncCommands, FromRedisValue, ToRedisArgs};

/// Operations on sorted sets
#[async_trait]
pub trait ZSetOperations: Send + Sync {
    /// Add `value` with `score`; true when it was not a member before
    ///
    /// An existing member only has its score updated.
    async fn zs_add<V>(&self, key: &str, value: V, score: f64) -> Result<bool>
    where
        V: ToRedisArgs + Send + Sync;

    /// Add several members; returns how many were new
    async fn zs_multi_add<V>(&self, key: &str, members: &[ScoredMember<V>]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Remove members; returns how many were removed
    async fn zs_remove<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Add `delta` to the score of `value`; returns the new score
    async fn zs_increment_score<V>(&self, key: &str, value: V, delta: f64) -> Result<f64>
    where
        V: ToRedisArgs + Send + Sync;

    /// Zero-based rank of `value`, lowest score first
    async fn zs_rank<V>(&self, key: &str, value: V) -> Result<Option<u64>>
    where
        V: ToRedisArgs + Send + Sync;

    /// Members between rank `start` and `end` inclusive, lowest score first
    async fn zs_range<V>(&self, key: &str, start: i64, end: i64) -> Result<Vec<V>>
    where
        V: FromRedisValue + Send;

    /// Like [`zs_range`](Self::zs_range), with scores
    async fn zs_range_with_scores<V>(
        &self,
        key: &str,
        start: i64,
        end: i64,
    ) -> Result<Vec<ScoredMember<V>>>
    where
        V: FromRedisValue + Send;

    /// Members whose score lies in `min..=max`, with scores
    async fn zs_range_by_score_with_scores<V>(
        &self,
        key: &str,
        min: f64,
        max: f64,
    ) -> Result<Vec<ScoredMember<V>>>
    where
        V: FromRedisValue + Send;
}

#[async_trait]
impl ZSetOperations for RedisService {
    async fn zs_add<V>(&self, key: &str, value: V, score: f64) -> Result<bool>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let Some(mut conn) = self.connection("ZADD", key) else {
            return Ok(false);
        };
        let added: u64 = conn.zadd(key, value, score).await?;
        Ok(added > 0)
    }

    async fn zs_multi_add<V>(&self, key: &str, members: &[ScoredMember<V>]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        if members.is_empty() {
            return Ok(0);
        }
        let Some(mut conn) = self.connection("ZADD", key) else {
            return Ok(0);
        };
        let items: Vec<(f64, &V)> = members.iter().map(|m| (m.score, &m.member)).collect();
        let added: u64 = conn.zadd_multiple(key, &items).await?;
        Ok(added)
    }

    async fn zs_remove<V>(&self, key: &str, values: &[V]) -> Result<u64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        if values.is_empty() {
            return Ok(0);
        }
        let Some(mut conn) = self.connection("ZREM", key) else {
            return Ok(0);
        };
        let removed: u64 = conn.zrem(key, values).await?;
        Ok(removed)
    }

    async fn zs_increment_score<V>(&self, key: &str, value: V, delta: f64) -> Result<f64>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let Some(mut conn) = self.connection("ZINCRBY", key) else {
            return Ok(delta);
        };
        let score: f64 = conn.zincr(key, value, delta).await?;
        Ok(score)
    }

    async fn zs_rank<V>(&self, key: &str, value: V) -> Result<Option<u64>>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let Some(mut conn) = self.connection("ZRANK", key) else {
            return Ok(None);
        };
        let rank: Option<u64> = conn.zrank(key, value).await?;
        Ok(rank)
    }

    async fn zs_range<V>(&self, key: &str, start: i64, end: i64) -> Result<Vec<V>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.connection("ZRANGE", key) else {
            return Ok(Vec::new());
        };
        let members: Vec<V> = conn.zrange(key, start as isize, end as isize).await?;
        Ok(members)
    }

    async fn zs_range_with_scores<V>(
        &self,
        key: &str,
        start: i64,
        end: i64,
    ) -> Result<Vec<ScoredMember<V>>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.connection("ZRANGE", key) else {
            return Ok(Vec::new());
        };
        let pairs: Vec<(V, f64)> = conn
            .zrange_withscores(key, start as isize, end as isize)
            .await?;
        Ok(pairs.into_iter().map(ScoredMember::from).collect())
    }

    async fn zs_range_by_score_with_scores<V>(
        &self,
        key: &str,
        min: f64,
        max: f64,
    ) -> Result<Vec<ScoredMember<V>>>
    where
        V: FromRedisValue + Send,
    {
        let Some(mut conn) = self.connection("ZRANGEBYSCORE", key) else {
            return Ok(Vec::new());
        };
        let pairs: Vec<(V, f64)> = conn.zrangebyscore_withscores(key, min, max).await?;
        Ok(pairs.into_iter().map(ScoredMember::from).collect())
    }
}
