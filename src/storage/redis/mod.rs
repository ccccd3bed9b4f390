//! Redis connectivity
//!
//! ## Module Structure
//!
//! - `pool` - Client, shared multiplexed connection and server-level commands
//! - `tests` - Module tests

mod pool;

// Re-export public types
pub use pool::RedisPool;
