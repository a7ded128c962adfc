//! Resolved runtime configuration for the catalog application.

use std::path::PathBuf;

use thiserror::Error;

use crate::gutendex::{DEFAULT_BASE_URL, HttpTimeouts, parse_absolute_url};

/// Default catalog database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "literalura.db";

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "invalid API base URL '{url}'\n  Suggestion: Use an absolute http(s) URL such as https://gutendex.com"
    )]
    InvalidApiBaseUrl { url: String },

    #[error("invalid {field}: {value} seconds. Expected range: 1..={max}")]
    InvalidTimeout {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

/// Where the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

/// Validated settings used to wire the application together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseLocation,
    pub api_base_url: String,
    pub timeouts: HttpTimeouts,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseLocation::File(PathBuf::from(DEFAULT_DATABASE_PATH)),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            timeouts: HttpTimeouts::default(),
        }
    }
}

impl AppConfig {
    /// Checks the API base URL and timeout bounds.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if parse_absolute_url(&self.api_base_url).is_err() {
            return Err(ConfigError::InvalidApiBaseUrl {
                url: self.api_base_url.clone(),
            });
        }
        validate_timeout("connect timeout", self.timeouts.connect_secs, 300)?;
        validate_timeout("timeout", self.timeouts.read_secs, 3600)?;
        Ok(())
    }
}

fn validate_timeout(field: &'static str, value: u64, max: u64) -> Result<(), ConfigError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidTimeout { field, value, max })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://gutendex.com");
        assert_eq!(
            config.database,
            DatabaseLocation::File(PathBuf::from("literalura.db"))
        );
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_relative_api_base_url_rejected() {
        let config = AppConfig {
            api_base_url: "gutendex.com".to_string(),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Suggestion"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = AppConfig {
            timeouts: HttpTimeouts {
                connect_secs: 0,
                read_secs: 30,
            },
            ..AppConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTimeout {
                field: "connect timeout",
                value: 0,
                max: 300
            })
        );
    }
}
