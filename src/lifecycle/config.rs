//! Runtime configuration.

use serde::Deserialize;
use thiserror::Error;

pub const DATA_SOURCE_VAR: &str = "CATALOG_DATA_SOURCE";
pub const CHANNEL_CAPACITY_VAR: &str = "CATALOG_CHANNEL_CAPACITY";
pub const LOG_VAR: &str = "CATALOG_LOG";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("channel capacity must be at least 1")]
    ZeroCapacity,
}

/// Settings for a [`CatalogSystem`](crate::lifecycle::CatalogSystem).
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Location handed to the bulk loader.
    pub data_source: String,
    /// Mailbox size of the store actor.
    pub channel_capacity: usize,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_source: "data/products.json".to_string(),
            channel_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `CATALOG_DATA_SOURCE`, `CATALOG_CHANNEL_CAPACITY` and
    /// `CATALOG_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(source) = lookup(DATA_SOURCE_VAR) {
            config.data_source = source;
        }
        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: CHANNEL_CAPACITY_VAR,
                        value: raw.clone(),
                    })?;
        }
        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
