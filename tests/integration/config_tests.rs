//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use redis_facade::config::{Config, LogFormat, RedisConfig, Validate};
    use redis_facade::FacadeError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// A file with only a redis section keeps logging defaults
    #[tokio::test]
    async fn test_partial_file() {
        let file = write_config("redis:\n  url: redis://10.0.0.5:6379/1\n");
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.redis.url, "redis://10.0.0.5:6379/1");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    /// Disabled redis still needs a well-formed URL
    #[tokio::test]
    async fn test_disabled_redis_is_validated() {
        let file = write_config("redis:\n  enabled: false\n  url: \"\"\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, FacadeError::Config(_)));
    }

    #[tokio::test]
    async fn test_malformed_yaml() {
        let file = write_config("redis: [unterminated");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_validate_trait_is_public() {
        let config = RedisConfig {
            url: "rediss://secure.example.com:6380".to_string(),
            ..RedisConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
