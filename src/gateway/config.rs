//! Gateway configuration

use std::time::Duration;
use tracing::warn;

/// Default API base path.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default per-request timeout. A timed-out request is reported, never retried.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "INVENTORY_API_URL";

/// Environment variable overriding the timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "INVENTORY_API_TIMEOUT_SECS";

/// Configuration for connecting to the inventory API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL every path is appended to (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Create a configuration for the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defaults overridden by `INVENTORY_API_URL` and `INVENTORY_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "Ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }
        config
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
