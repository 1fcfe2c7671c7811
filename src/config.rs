//! API configuration
//!
//! The base URL every order request is built from. Browser builds can only
//! override it at compile time (`ORDERS_API_BASE`); the native launcher also
//! accepts it at runtime through its CLI.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::shared::errors::{AppError, Result};

/// Mock endpoint serving the cargo-order collections
pub const DEFAULT_API_BASE: &str =
    "https://129bc152-6319-4e38-b755-534a4ee46195.mock.pstmn.io/orders";

/// Environment variable overriding the base URL
pub const API_BASE_ENV: &str = "ORDERS_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config, rejecting anything that is not an absolute http(s) URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();

        let valid = Url::parse(trimmed)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
            .unwrap_or(false);

        if !valid {
            return Err(AppError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint onto the base URL. An empty endpoint is the base itself.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        // Compile-time override; an invalid value falls back to the mock endpoint
        option_env!("ORDERS_API_BASE")
            .and_then(|base| ApiConfig::new(base).ok())
            .unwrap_or_else(|| Self {
                base_url: DEFAULT_API_BASE.to_string(),
            })
    }
}
