//! E2E tests for list operations

#[cfg(test)]
mod tests {
    use crate::common::{live_service, unique_key};
    use crate::skip_without_env;
    use redis_facade::{KeyOperations, ListOperations};
    use std::time::{Duration, Instant};

    #[tokio::test]
    #[ignore]
    async fn test_push_pop_order() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("list");

        assert_eq!(redis.l_push(&key, "b").await.unwrap(), 1);
        assert_eq!(redis.l_push(&key, "a").await.unwrap(), 2);
        assert_eq!(redis.r_push(&key, "c").await.unwrap(), 3);

        assert_eq!(redis.l_index::<String>(&key, 0).await.unwrap().as_deref(), Some("a"));
        assert_eq!(redis.l_index::<String>(&key, -1).await.unwrap().as_deref(), Some("c"));
        assert_eq!(redis.l_index::<String>(&key, 10).await.unwrap(), None);

        assert_eq!(redis.l_pop::<String>(&key).await.unwrap().as_deref(), Some("a"));
        assert_eq!(redis.r_pop::<String>(&key).await.unwrap().as_deref(), Some("c"));
        assert_eq!(redis.l_size(&key).await.unwrap(), 1);

        redis.del(&key).await.unwrap();
        assert_eq!(redis.l_pop::<String>(&key).await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore]
    async fn test_push_all_ordering() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let left = unique_key("left");
        let right = unique_key("right");

        assert_eq!(redis.l_push_all(&left, &["a", "b", "c"]).await.unwrap(), 3);
        assert_eq!(redis.r_push_all(&right, &["a", "b", "c"]).await.unwrap(), 3);

        let mut from_left = Vec::new();
        while let Some(v) = redis.l_pop::<String>(&left).await.unwrap() {
            from_left.push(v);
        }
        assert_eq!(from_left, ["c", "b", "a"]);

        let mut from_right = Vec::new();
        while let Some(v) = redis.l_pop::<String>(&right).await.unwrap() {
            from_right.push(v);
        }
        assert_eq!(from_right, ["a", "b", "c"]);
    }

    #[tokio::test]
    #[ignore]
    async fn test_remove_and_rotate() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("rem");
        let done = unique_key("done");

        redis.r_push_all(&key, &["x", "y", "x", "x"]).await.unwrap();
        assert_eq!(redis.l_remove(&key, 2, "x").await.unwrap(), 2);
        assert_eq!(redis.l_size(&key).await.unwrap(), 2);

        let moved: Option<String> = redis.r_pop_l_push(&key, &done).await.unwrap();
        assert_eq!(moved.as_deref(), Some("x"));
        assert_eq!(redis.l_size(&done).await.unwrap(), 1);

        redis.del(&key).await.unwrap();
        redis.del(&done).await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_numeric_values() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("numbers");

        redis.r_push(&key, 7_i64).await.unwrap();
        assert_eq!(redis.r_pop::<i64>(&key).await.unwrap(), Some(7));
    }

    #[tokio::test]
    #[ignore]
    async fn test_blocking_pop() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("blocking");

        let started = Instant::now();
        let nothing: Option<String> = redis
            .bl_pop(&key, Duration::from_millis(200))
            .await
            .unwrap();
        assert_eq!(nothing, None);
        assert!(started.elapsed() >= Duration::from_millis(150));

        redis.r_push(&key, "job").await.unwrap();
        let job: Option<String> = redis.br_pop(&key, Duration::from_secs(1)).await.unwrap();
        assert_eq!(job.as_deref(), Some("job"));
    }
}
