// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses store connection and logging settings from environment variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration.
//!
//! Everything is driven by environment variables with development-friendly
//! defaults, so a bare `memory://` store works with no setup at all:
//!
//! | Variable                     | Default     | Meaning                       |
//! |------------------------------|-------------|-------------------------------|
//! | `STORE_URL`                  | `memory://` | Store connection string       |
//! | `STORE_AUTH_TOKEN`           | unset       | REST backend auth query token |
//! | `STORE_TIMEOUT_SECS`         | `30`        | Request timeout               |
//! | `STORE_CONNECT_TIMEOUT_SECS` | `10`        | Connection timeout            |

use anyhow::{Context, Result};
use std::env;
use tracing::info;

use crate::logging::LoggingConfig;

/// Default store connection string
const DEFAULT_STORE_URL: &str = "memory://";
/// Default request timeout, seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default connection timeout, seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection string: `memory://` or the REST base URL
    pub url: String,
    /// Optional `auth` query token for the REST backend
    pub auth_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STORE_URL.into(),
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Document store connection
    pub store: StoreConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable is set but unparseable.
    pub fn from_env() -> Result<Self> {
        let store = StoreConfig {
            url: env::var("STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.into()),
            auth_token: env::var("STORE_AUTH_TOKEN").ok(),
            timeout_secs: parse_env_u64("STORE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env_u64(
                "STORE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self {
            store,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Log a structured startup summary of the resolved configuration.
    pub fn log_summary(&self) {
        info!(
            store.url = %redact_url(&self.store.url),
            store.timeout_secs = self.store.timeout_secs,
            store.auth = self.store.auth_token.is_some(),
            log.level = %self.logging.level,
            "configuration loaded"
        );
    }
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{name} must be a positive integer, got `{raw}`")),
        Err(_) => Ok(default),
    }
}

/// Strip query parameters before logging so tokens never reach the logs.
fn redact_url(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
