//! # Dashboard Configuration
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. environment variables (`SESSION_DASHBOARD_BASE_URL`,
//!    `SESSION_DASHBOARD_TIMEOUT_SECS`, `SESSION_DASHBOARD_LOG`)
//!
//! Command line flags are applied on top by the binary.
//!
//! ## YAML Format
//!
//! ```yaml
//! base_url: "http://localhost:5000"
//! request_timeout_secs: 10
//! log_filter: "info"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

pub const BASE_URL_ENV: &str = "SESSION_DASHBOARD_BASE_URL";
pub const TIMEOUT_ENV: &str = "SESSION_DASHBOARD_TIMEOUT_SECS";
pub const LOG_ENV: &str = "SESSION_DASHBOARD_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Booking site origin serving `/customer/get_sessions`
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_secs: 10,
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load defaults, then the YAML file if given, then process environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|name| std::env::var(name).ok())
    }

    /// Read a YAML config file; missing keys fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_text = path.display().to_string();
        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path_text.clone(),
            source,
        })?;
        let config: DashboardConfig =
            serde_yaml::from_str(&yaml_content).map_err(|source| ConfigError::Parse {
                path: path_text.clone(),
                source,
            })?;
        debug!("Loaded dashboard config from {}", path_text);
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            self.request_timeout_secs =
                timeout.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    name: TIMEOUT_ENV,
                    value: timeout.clone(),
                })?;
        }
        if let Some(filter) = lookup(LOG_ENV) {
            self.log_filter = filter;
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
