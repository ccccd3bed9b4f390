//! E2E tests for sorted-set operations

#[cfg(test)]
mod tests {
    use crate::common::{live_service, unique_key};
    use crate::skip_without_env;
    use redis_facade::{KeyOperations, ScoredMember, ZSetOperations};

    #[tokio::test]
    #[ignore]
    async fn test_scores_and_ranks() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("board");

        assert!(redis.zs_add(&key, "alice", 10.0).await.unwrap());
        assert!(!redis.zs_add(&key, "alice", 12.0).await.unwrap());

        let batch = vec![ScoredMember::new("bob", 5.0), ScoredMember::new("eve", 20.0)];
        assert_eq!(redis.zs_multi_add(&key, &batch).await.unwrap(), 2);

        assert_eq!(redis.zs_rank(&key, "bob").await.unwrap(), Some(0));
        assert_eq!(redis.zs_rank(&key, "alice").await.unwrap(), Some(1));
        assert_eq!(redis.zs_rank(&key, "nobody").await.unwrap(), None);

        assert_eq!(
            redis.zs_increment_score(&key, "bob", 10.5).await.unwrap(),
            15.5
        );

        let names: Vec<String> = redis.zs_range(&key, 0, -1).await.unwrap();
        assert_eq!(names, ["alice", "bob", "eve"]);

        let top: Vec<ScoredMember<String>> =
            redis.zs_range_with_scores(&key, -1, -1).await.unwrap();
        assert_eq!(top, vec![ScoredMember::new("eve".to_string(), 20.0)]);

        let middle: Vec<ScoredMember<String>> = redis
            .zs_range_by_score_with_scores(&key, 11.0, 16.0)
            .await
            .unwrap();
        assert_eq!(
            middle,
            vec![
                ScoredMember::new("alice".to_string(), 12.0),
                ScoredMember::new("bob".to_string(), 15.5),
            ]
        );

        assert_eq!(redis.zs_remove(&key, &["alice", "nobody"]).await.unwrap(), 1);

        redis.del(&key).await.unwrap();
    }
}
