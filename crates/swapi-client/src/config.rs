//! Client configuration
//!
//! The configuration is built once at process start and is immutable
//! afterwards. Tests substitute the upstream by pointing `base_url` at a
//! local mock server.

use std::time::Duration;

/// Base URL of the public SWAPI deployment.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Fixed per-request timeout applied uniformly to every upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`SwapiClient`](crate::SwapiClient).
#[derive(Debug, Clone)]
pub struct SwapiConfig {
    /// Base URL of the upstream API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SwapiConfig {
    /// Create a configuration for a custom upstream deployment.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
