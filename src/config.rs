//! Process configuration read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `BIND_ADDRESS` | `0.0.0.0:3000` |
//! | `STORAGE_MODE` | `in_memory` (or `postgres`) |
//! | `DATABASE_URL` | required when `STORAGE_MODE=postgres` |
//! | `DATABASE_MAX_CONNECTIONS` | `10` |
//! | `TASKS_TIMEZONE` | `America/New_York` |
//! | `SLACK_API_KEY` | unset, which disables notifications |
//! | `SLACK_API_URL` | `https://slack.com/api/chat.postMessage` |
//! | `SLACK_CHANNEL` | `task-notifications` |
//! | `SLACK_MESSAGE_TEMPLATE` | see [`DEFAULT_MESSAGE_TEMPLATE`] |

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

use crate::task::{
    adapters::slack::{
        DEFAULT_MESSAGE_TEMPLATE, DEFAULT_SLACK_CHANNEL, DEFAULT_SLACK_ENDPOINT,
        SlackNotifierSettings,
    },
    domain::ReferenceTimezone,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `STORAGE_MODE` holds an unknown value.
    #[error("invalid storage mode '{0}', expected 'in_memory' or 'postgres'")]
    InvalidStorageMode(String),

    /// `DATABASE_URL` is missing while `STORAGE_MODE=postgres`.
    #[error("DATABASE_URL is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,

    /// A variable could not be parsed.
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Backing store selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageMode {
    /// Process-local store; contents vanish on restart.
    #[default]
    InMemory,
    /// `PostgreSQL` via Diesel.
    Postgres,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConfigError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// In-memory repository.
    InMemory,
    /// `PostgreSQL` repository.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Maximum pooled connections.
        max_connections: u32,
    },
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Socket the HTTP server listens on.
    pub bind_address: SocketAddr,
    /// Task store selection.
    pub storage: StorageConfig,
    /// Timezone used to stamp and format completion times.
    pub timezone: ReferenceTimezone,
    /// Outbound notification settings; `None` disables notifications.
    pub notifier: Option<SlackNotifierSettings>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is malformed or a required one
    /// is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// when set.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is malformed or a required one
    /// is missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let bind_raw = read("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned());
        let bind_address = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "BIND_ADDRESS",
                value: bind_raw.clone(),
            })?;

        let storage_mode = read("STORAGE_MODE")
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();
        let storage = match storage_mode {
            StorageMode::InMemory => StorageConfig::InMemory,
            StorageMode::Postgres => {
                let database_url = read("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;
                let max_connections = match read("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .parse::<u32>()
                        .ok()
                        .filter(|count| *count > 0)
                        .ok_or(ConfigError::InvalidValue {
                            key: "DATABASE_MAX_CONNECTIONS",
                            value: raw,
                        })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                StorageConfig::Postgres {
                    database_url,
                    max_connections,
                }
            }
        };

        let timezone = match read("TASKS_TIMEZONE") {
            Some(name) => ReferenceTimezone::parse(&name).map_err(|_| ConfigError::InvalidValue {
                key: "TASKS_TIMEZONE",
                value: name,
            })?,
            None => ReferenceTimezone::default(),
        };

        let notifier = read("SLACK_API_KEY").map(|api_token| SlackNotifierSettings {
            api_token,
            endpoint: read("SLACK_API_URL").unwrap_or_else(|| DEFAULT_SLACK_ENDPOINT.to_owned()),
            channel: read("SLACK_CHANNEL").unwrap_or_else(|| DEFAULT_SLACK_CHANNEL.to_owned()),
            message_template: read("SLACK_MESSAGE_TEMPLATE")
                .unwrap_or_else(|| DEFAULT_MESSAGE_TEMPLATE.to_owned()),
        });

        Ok(Self {
            bind_address,
            storage,
            timezone,
            notifier,
        })
    }
}
