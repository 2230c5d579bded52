//! Configuration
//!
//! Read from environment variables with logged fallbacks.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use reqwest::Url;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "3001";
pub const DEFAULT_UPSTREAM_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: &str = "10";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_base_url: Url,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `load` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let upstream_base_url: Url = try_load(&lookup, "POKEAPI_BASE_URL", DEFAULT_UPSTREAM_URL)?;
        if upstream_base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                key: "POKEAPI_BASE_URL",
                value: upstream_base_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }

        let timeout_secs: u64 = try_load(&lookup, "UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            upstream_base_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.upstream_base_url.as_str(), "https://pokeapi.co/api/v2");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("POKEAPI_BASE_URL", "http://127.0.0.1:9000/v2"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_base_url.as_str(), "http://127.0.0.1:9000/v2");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_non_base_upstream_url() {
        let err = Config::from_lookup(lookup_from(&[("POKEAPI_BASE_URL", "mailto:ash@example.com")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "POKEAPI_BASE_URL", .. }));
    }
}
