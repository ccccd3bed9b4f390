//! Redis command facade
//!
//! [`RedisService`] forwards each call to exactly one Redis command over the
//! pool's shared connection. The command surface is split by data type, one
//! trait per family, mirroring how the client groups its operations:
//!
//! - [`ValueOperations`] - string values
//! - [`KeyOperations`] - key lifetime and existence
//! - [`HashOperations`] - hash fields
//! - [`ListOperations`] - list push/pop, including blocking pops
//! - [`SetOperations`] - set membership and set algebra
//! - [`ZSetOperations`] - sorted-set scores and ranks
//!
//! Replies and errors come back unchanged. A service over a disabled pool
//! answers every call with the neutral value for its return type.
//!
//! ```rust,no_run
//! use redis_facade::config::RedisConfig;
//! use redis_facade::service::{HashOperations, RedisService};
//!
//! # async fn run() -> redis_facade::Result<()> {
//! let redis = RedisService::connect(&RedisConfig::default()).await?;
//! redis.h_set("stu", "name", "lisan").await?;
//! assert_eq!(redis.h_get("stu", "name").await?.as_deref(), Some("lisan"));
//! # Ok(())
//! # }
//! ```

pub mod expiry;
pub mod hash;
pub mod keys;
pub mod list;
pub mod set;
pub mod types;
pub mod value;
pub mod zset;


pub use expiry::Expiry;
pub use hash::HashOperations;
pub use keys::KeyOperations;
pub use list::ListOperations;
pub use set::SetOperations;
pub use types::ScoredMember;
pub use value::ValueOperations;
pub use zset::ZSetOperations;

use crate::config::RedisConfig;
use crate::storage::RedisPool;
use crate::utils::error::Result;
use redis::aio::MultiplexedConnection;
use std::sync::Arc;
use tracing::trace;

/// Every facade operation, for callers that want the whole surface behind one bound
pub trait RedisOperations:
    ValueOperations + KeyOperations + HashOperations + ListOperations + SetOperations + ZSetOperations
{
}

impl<T> RedisOperations for T where
    T: ValueOperations
        + KeyOperations
        + HashOperations
        + ListOperations
        + SetOperations
        + ZSetOperations
{
}

/// Redis facade over a shared connection pool
#[derive(Debug, Clone)]
pub struct RedisService {
    pool: Arc<RedisPool>,
}

impl RedisService {
    /// Create a service over an existing pool
    pub fn new(pool: Arc<RedisPool>) -> Self {
        Self { pool }
    }

    /// Connect according to the configuration
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        let pool = RedisPool::connect(config).await?;
        Ok(Self::new(Arc::new(pool)))
    }

    /// Service over a disabled pool
    pub fn disabled() -> Self {
        Self::new(Arc::new(RedisPool::create_disabled()))
    }

    /// Pool backing this service
    pub fn pool(&self) -> &Arc<RedisPool> {
        &self.pool
    }

    /// Connection handle for one command, None when the pool is disabled
    pub(crate) fn connection(&self, command: &'static str, key: &str) -> Option<MultiplexedConnection> {
        trace!(command, key, "redis command");
        self.pool.connection()
    }

    /// Connection of its own for a blocking command, None when the pool is disabled
    pub(crate) async fn dedicated_connection(
        &self,
        command: &'static str,
        key: &str,
    ) -> Result<Option<MultiplexedConnection>> {
        trace!(command, key, "redis blocking command");
        self.pool.dedicated_connection().await
    }
}
