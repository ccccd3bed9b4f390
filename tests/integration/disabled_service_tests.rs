//! Facade behaviour over a disabled pool, through the public API only

#[cfg(test)]
mod tests {
    use redis_facade::config::RedisConfig;
    use redis_facade::{
        HashOperations, KeyOperations, ListOperations, RedisOperations, RedisService,
        ValueOperations, ZSetOperations,
    };
    use std::time::Duration;

    async fn disabled() -> RedisService {
        let config = RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        };
        RedisService::connect(&config).await.unwrap()
    }

    /// Generic callers can hold the facade behind a single bound
    async fn cache_session<R: RedisOperations>(redis: &R, id: &str) -> redis_facade::Result<bool> {
        redis
            .set_nx_ex(id, "active", Duration::from_secs(30))
            .await
    }

    #[tokio::test]
    async fn test_generic_caller() {
        let redis = disabled().await;
        assert!(!cache_session(&redis, "session:1").await.unwrap());
    }

    #[tokio::test]
    async fn test_neutral_values() {
        let redis = disabled().await;
        assert_eq!(redis.get("k").await.unwrap(), None);
        assert_eq!(redis.get_expire("k").await.unwrap(), -2);
        assert_eq!(redis.h_size("h").await.unwrap(), 0);
        assert_eq!(redis.l_pop::<Vec<u8>>("l").await.unwrap(), None);
        assert_eq!(redis.zs_rank("z", "m").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_disabled_service_is_shareable() {
        let redis = disabled().await;
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let redis = redis.clone();
                tokio::spawn(async move { redis.exist(&format!("k{}", i)).await })
            })
            .collect();

        for handle in handles {
            assert!(!handle.await.unwrap().unwrap());
        }
    }
}
