//! Storage layer
//!
//! Connection management for the Redis server the facade talks to.

/// Redis connection module
pub mod redis;

pub use self::redis::RedisPool;
