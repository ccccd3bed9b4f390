//! # redis-facade
//!
//! A typed async facade over the Redis command surface: strings, keys,
//! hashes, lists, sets and sorted sets. Each facade method issues exactly one
//! command through the [`redis`] client and hands back its reply unchanged.
//!
//! ## Features
//!
//! - **One call, one command**: no retries, no caching, no command composition
//! - **Grouped by data type**: `ValueOperations`, `KeyOperations`, `HashOperations`,
//!   `ListOperations`, `SetOperations`, `ZSetOperations`
//! - **Shared connection**: a single multiplexed connection serves every caller
//! - **Disabled mode**: run without a server, every call answers a neutral value
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use redis_facade::{Config, RedisService};
//! use redis_facade::service::{ListOperations, ValueOperations};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/redis.yaml").await?;
//!     let redis = RedisService::connect(&config.redis).await?;
//!
//!     redis.set_ex("session:42", "alice", Duration::from_secs(60)).await?;
//!     println!("{:?}", redis.get("session:42").await?);
//!
//!     redis.r_push("jobs", "resize:7").await?;
//!     let job: Option<String> = redis.bl_pop("jobs", Duration::from_secs(5)).await?;
//!     println!("next job: {:?}", job);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod service;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use service::{
    HashOperations, KeyOperations, ListOperations, RedisOperations, RedisService,
    ScoredMember, SetOperations, ValueOperations, ZSetOperations,
};
pub use storage::RedisPool;
pub use utils::error::{FacadeError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information captured at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
