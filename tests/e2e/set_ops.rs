//! E2E tests for set operations

#[cfg(test)]
mod tests {
    use crate::common::{live_service, unique_key};
    use crate::skip_without_env;
    use redis_facade::{KeyOperations, SetOperations};
    use std::collections::HashSet;

    fn set_of(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    #[ignore]
    async fn test_membership() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("tags");

        assert_eq!(redis.s_add(&key, &["a", "b", "b", "c"]).await.unwrap(), 3);
        assert_eq!(redis.s_size(&key).await.unwrap(), 3);
        assert!(redis.s_is_member(&key, "a").await.unwrap());
        assert!(!redis.s_is_member(&key, "z").await.unwrap());

        assert_eq!(redis.s_remove(&key, &["a", "z"]).await.unwrap(), 1);
        let members: HashSet<String> = redis.s_members(&key).await.unwrap();
        assert_eq!(members, set_of(&["b", "c"]));

        redis.del(&key).await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_set_algebra() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let left = unique_key("left");
        let right = unique_key("right");
        let dest = unique_key("dest");

        redis.s_add(&left, &["a", "b", "c"]).await.unwrap();
        redis.s_add(&right, &["b", "c", "d"]).await.unwrap();

        let diff: HashSet<String> = redis.s_diff(&left, &right).await.unwrap();
        assert_eq!(diff, set_of(&["a"]));
        let union: HashSet<String> = redis.s_union(&left, &right).await.unwrap();
        assert_eq!(union, set_of(&["a", "b", "c", "d"]));
        let inter: HashSet<String> = redis.s_inter(&left, &right).await.unwrap();
        assert_eq!(inter, set_of(&["b", "c"]));

        assert_eq!(redis.s_diff_store(&left, &right, &dest).await.unwrap(), 1);
        assert_eq!(redis.s_union_store(&left, &right, &dest).await.unwrap(), 4);
        assert_eq!(redis.s_inter_store(&left, &right, &dest).await.unwrap(), 2);
        assert_eq!(redis.s_size(&dest).await.unwrap(), 2);

        for key in [&left, &right, &dest] {
            redis.del(key).await.unwrap();
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_random_and_move() {
        skip_without_env!("REDIS_URL");
        let redis = live_service().await;
        let key = unique_key("pool");
        let other = unique_key("other");

        redis.s_add(&key, &["a", "b", "c"]).await.unwrap();

        let picked: Vec<String> = redis.s_random_distinct(&key, 2).await.unwrap();
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);

        let all: Vec<String> = redis.s_random_distinct(&key, 10).await.unwrap();
        assert_eq!(all.len(), 3);

        assert!(redis.s_move(&key, "a", &other).await.unwrap());
        assert!(!redis.s_move(&key, "a", &other).await.unwrap());
        assert!(redis.s_is_member(&other, "a").await.unwrap());

        redis.del(&key).await.unwrap();
        redis.del(&other).await.unwrap();
    }
}
