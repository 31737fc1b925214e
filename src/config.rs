// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line configuration loaded from environment variables.

use crate::error::TimeError;
use crate::zone::Zone;
use std::env;

/// Environment variable holding the default zone for the CLI.
pub const TIMEZONE_VAR: &str = "SPOT_TIMEZONE";
/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Structured JSON lines
    #[default]
    Json,
    /// Human-readable
    Pretty,
}

/// Configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Zone used when `--tz` is not given
    pub default_zone: Zone,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            default_zone: Zone::utc(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_zone = match lookup(TIMEZONE_VAR) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidZone {
                var: TIMEZONE_VAR,
                source,
            })?,
            None => Zone::Local,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::Json,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "json" => LogFormat::Json,
                "pretty" | "text" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: LOG_FORMAT_VAR,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            default_zone,
            log_format,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid time zone in {var}")]
    InvalidZone {
        var: &'static str,
        #[source]
        source: TimeError,
    },

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}
