//! Command-line interface
//!
//! Each invocation runs one facade operation and renders its reply as text:
//! scalars as-is, missing values as `(nil)`, collections as JSON.

use crate::config::Config;
use crate::service::{
    HashOperations, KeyOperations, ListOperations, RedisService, ScoredMember, SetOperations,
    ValueOperations, ZSetOperations,
};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Run single Redis commands through the facade
#[derive(Debug, Parser)]
#[command(name = "redis-facade", version, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "REDIS_FACADE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Redis URL, overriding the configuration
    #[arg(long)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// One facade operation
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the server answers PING
    Ping,
    /// Print the server INFO report
    Info,
    /// Print build information
    Version,
    /// Get a string value
    Get { key: String },
    /// Set a string value
    Set {
        key: String,
        value: String,
        /// Time-to-live in seconds
        #[arg(long)]
        ttl: Option<u64>,
        /// Only set when the key does not exist
        #[arg(long)]
        nx: bool,
    },
    /// Delete a key
    Del { key: String },
    /// Remaining time-to-live in seconds
    Ttl { key: String },
    /// Get a hash field
    Hget { key: String, field: String },
    /// Set a hash field
    Hset {
        key: String,
        field: String,
        value: String,
    },
    /// All fields and values of a hash
    Hgetall { key: String },
    /// Push values onto the head of a list
    Lpush {
        key: String,
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Pop from the tail of a list
    Rpop { key: String },
    /// All members of a set
    Smembers { key: String },
    /// Sorted-set members by rank
    Zrange {
        key: String,
        #[arg(default_value_t = 0, allow_hyphen_values = true)]
        start: i64,
        #[arg(default_value_t = -1, allow_hyphen_values = true)]
        end: i64,
        /// Include scores
        #[arg(long)]
        with_scores: bool,
    },
}

impl Cli {
    /// Load configuration for this invocation: file, environment, then flags
    pub async fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_unvalidated(self.config.as_deref()).await?;
        if let Some(url) = &self.url {
            config.redis.url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn nil_or(value: Option<String>) -> String {
    value.unwrap_or_else(|| "(nil)".to_string())
}

fn json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Execute a command and render its reply
pub async fn run(service: &RedisService, command: &Command) -> Result<String> {
    debug!(?command, "Running command");

    let output = match command {
        Command::Ping => {
            service.pool().health_check().await?;
            "PONG".to_string()
        }
        Command::Info => service.pool().info().await?,
        Command::Version => {
            let info = crate::build_info();
            format!(
                "{} {} ({}, built {}, {})",
                crate::NAME,
                info.version,
                info.git_hash,
                info.build_time,
                info.rust_version
            )
        }
        Command::Get { key } => nil_or(service.get(key).await?),
        Command::Set {
            key,
            value,
            ttl,
            nx,
        } => {
            let written = match (ttl, nx) {
                (Some(secs), true) => {
                    service
                        .set_nx_ex(key, value, Duration::from_secs(*secs))
                        .await?
                }
                (None, true) => service.set_nx(key, value).await?,
                (Some(secs), false) => {
                    service.set_ex(key, value, Duration::from_secs(*secs)).await?;
                    true
                }
                (None, false) => {
                    service.set(key, value).await?;
                    true
                }
            };
            let reply = if written { "OK" } else { "(nil)" };
            reply.to_string()
        }
        Command::Del { key } => (service.del(key).await? as u8).to_string(),
        Command::Ttl { key } => service.get_expire(key).await?.to_string(),
        Command::Hget { key, field } => nil_or(service.h_get(key, field).await?),
        Command::Hset { key, field, value } => {
            service.h_set(key, field, value).await?;
            "OK".to_string()
        }
        Command::Hgetall { key } => {
            let entries: BTreeMap<_, _> = service.get_h_entries(key).await?.into_iter().collect();
            json(&entries)?
        }
        Command::Lpush { key, values } => service.l_push_all(key, values).await?.to_string(),
        Command::Rpop { key } => nil_or(service.r_pop::<String>(key).await?),
        Command::Smembers { key } => {
            let members: BTreeSet<String> =
                service.s_members::<String>(key).await?.into_iter().collect();
            json(&members)?
        }
        Command::Zrange {
            key,
            start,
            end,
            with_scores,
        } => {
            if *with_scores {
                let members: Vec<ScoredMember<String>> =
                    service.zs_range_with_scores(key, *start, *end).await?;
                json(&members)?
            } else {
                let members: Vec<String> = service.zs_range(key, *start, *end).await?;
                json(&members)?
            }
        }
    };

    Ok(output)
}
