use std::env;
use std::str::FromStr;

use footle_core::{ComparatorConfig, WinRule};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub api_key: String,
    pub snapshot_name: String,
    pub roster_size: usize,
    pub request_timeout_seconds: u64,
    pub join_timeout_seconds: u64,
    pub max_concurrent_requests: usize,
    pub index_html_path: String,
    pub win_rule: WinRule,
    pub continent_proximity: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            api_url: lookup("SORARE_API_URL").unwrap_or(defaults.api_url),
            api_key: lookup("SORARE_API_KEY").unwrap_or(defaults.api_key),
            snapshot_name: lookup("SNAPSHOT_NAME").unwrap_or(defaults.snapshot_name),
            roster_size: parse_or(&lookup, "ROSTER_SIZE", defaults.roster_size)?,
            request_timeout_seconds: parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout_seconds,
            )?,
            join_timeout_seconds: parse_or(
                &lookup,
                "JOIN_TIMEOUT_SECONDS",
                defaults.join_timeout_seconds,
            )?,
            max_concurrent_requests: parse_or(
                &lookup,
                "MAX_CONCURRENT_REQUESTS",
                defaults.max_concurrent_requests,
            )?,
            index_html_path: lookup("INDEX_HTML_PATH").unwrap_or(defaults.index_html_path),
            win_rule: parse_or(&lookup, "WIN_RULE", defaults.win_rule)?,
            continent_proximity: parse_or(
                &lookup,
                "CONTINENT_PROXIMITY",
                defaults.continent_proximity,
            )?,
        };

        if config.roster_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ROSTER_SIZE",
                value: "0".to_string(),
            });
        }
        if config.max_concurrent_requests == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_CONCURRENT_REQUESTS",
                value: "0".to_string(),
            });
        }

        Ok(config)
    }

    pub fn comparator_config(&self) -> ComparatorConfig {
        ComparatorConfig {
            win_rule: self.win_rule,
            continent_proximity: self.continent_proximity,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            api_url: "https://api.sorare.com/graphql".to_string(),
            api_key: String::new(),
            snapshot_name: "players".to_string(),
            roster_size: 1500,
            request_timeout_seconds: 10,
            join_timeout_seconds: 10,
            max_concurrent_requests: 16,
            index_html_path: "./index.html".to_string(),
            win_rule: WinRule::IdentifierEquality,
            continent_proximity: true,
        }
    }
}
