//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::client::DEFAULT_PAGE_SIZE;

/// Default backend API base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level application configuration.
///
/// Every section has serde defaults so a partial YAML file (or none at all)
/// yields a working configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub demo: DemoConfig,
    pub listing: ListingConfig,
}

/// Backend API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Demo-mode settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// When set, the demo client replays this dump instead of hitting the API
    pub dump_path: Option<PathBuf>,
}

/// Listing display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Images per page
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Validation error for configuration values.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("api.base_url must be an http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("api.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("listing.page_size must be greater than zero")]
    ZeroPageSize,
}

impl AppConfig {
    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(self.api.base_url.clone()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.listing.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
