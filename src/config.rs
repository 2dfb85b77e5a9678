//! Configuration management.
//!
//! This module handles loading and validating configuration from environment
//! variables. The default phone region is carried here explicitly and passed
//! into normalization calls; it is never process-global state.

use crate::domain::Region;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration for the contact core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Region assumed for phone numbers entered in national format, and
    /// the reference point for the international flag (default: US)
    pub default_region: Region,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DEFAULT_PHONE_REGION`: ISO 3166-1 alpha-2 region code (default: "US")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let default_region = match env::var("DEFAULT_PHONE_REGION") {
            Ok(code) => Region::from_code(&code).map_err(|_| ConfigError::InvalidValue {
                var: "DEFAULT_PHONE_REGION".to_string(),
                reason: format!("Unknown region code: {}", code),
            })?,
            Err(_) => Region::US,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            default_region,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_region: Region::US,
            log_level: "info".to_string(),
        }
    }
}
