//! E2E tests for hash operations

#[cfg(test)]
mod tests {
    use crate::common::{live_service, unique_key};
    use crate::skip_without_env;
    use redis_facade::{HashOperations, KeyOperations, ValueOperations};
    use std::collections::{HashMap, HashSet};

    #[tokio::test]
    #[ignore]
    async fn test_hash_fields() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("stu");

        redis.h_set(&key, "name", "lisan").await.unwrap();
        assert_eq!(
            redis.h_get(&key, "name").await.unwrap().as_deref(),
            Some("lisan")
        );
        assert!(!redis.h_set_nx(&key, "name", "other").await.unwrap());
        assert!(redis.h_set_nx(&key, "age", "20").await.unwrap());

        let mut more = HashMap::new();
        more.insert("age".to_string(), "21".to_string());
        more.insert("class".to_string(), "3".to_string());
        redis.multi_h_set(&key, &more).await.unwrap();

        assert_eq!(redis.h_size(&key).await.unwrap(), 3);
        assert!(redis.h_exist(&key, "class").await.unwrap());

        let entries = redis.get_h_entries(&key).await.unwrap();
        assert_eq!(entries.get("age").map(String::as_str), Some("21"));

        let fields = redis.get_h_keys(&key).await.unwrap();
        let expected: HashSet<String> = ["name", "age", "class"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(fields, expected);

        assert_eq!(redis.h_del(&key, &["age", "missing"]).await.unwrap(), 1);
        assert_eq!(redis.h_get(&key, "age").await.unwrap(), None);

        redis.del(&key).await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_wrong_type_passes_through() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("string");

        redis.set(&key, "not a hash").await.unwrap();
        let err = redis.h_get(&key, "field").await.unwrap_err();
        assert!(matches!(err, redis_facade::FacadeError::Redis(_)));

        redis.del(&key).await.unwrap();
    }
}
