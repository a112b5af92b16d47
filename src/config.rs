use config::{ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub address: String,
    /// Insert the two sample customers at startup.
    pub seed_data: bool,
    /// Maximum accepted request body size in bytes.
    pub body_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_builder(config::Config::builder())
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let s = with_defaults(builder)?
            .add_source(Environment::with_prefix("CUSTOMERS"))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            seed_data: true,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("address", DEFAULT_ADDRESS)?
        .set_default("seed_data", true)?
        .set_default("body_limit", DEFAULT_BODY_LIMIT as u64)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
