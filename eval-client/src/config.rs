//! Client configuration
//!
//! | Env var | Default | Meaning |
//! |---------|---------|---------|
//! | API_BASE_URL | http://localhost:8081 | evaluation service address |
//! | API_TIMEOUT | 60000 | request timeout in milliseconds |

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

pub const BASE_URL_ENV: &str = "API_BASE_URL";
pub const TIMEOUT_ENV: &str = "API_TIMEOUT";

/// Client configuration for connecting to the evaluation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8081")
    pub base_url: String,

    /// Default timeout applied to every request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Load from `API_BASE_URL` / `API_TIMEOUT`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(TIMEOUT_ENV).ok(),
        )
    }

    /// Build from raw override values.
    ///
    /// An empty base URL, or a timeout that is missing, unparseable or zero,
    /// falls back to the default.
    pub fn from_vars(base_url: Option<String>, timeout_ms: Option<String>) -> Self {
        let base_url = base_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_ms = timeout_ms
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self::new(base_url).with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout in whole milliseconds, as shown to users
    pub fn timeout_ms(&self) -> u128 {
        self.timeout.as_millis()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8081");
        assert_eq!(config.timeout, Duration::from_millis(60_000));
        assert_eq!(config.timeout_ms(), 60_000);
    }

    #[test]
    fn test_overrides() {
        let config =
            ClientConfig::from_vars(Some("http://10.0.0.5:9000".into()), Some("15000".into()));
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.timeout_ms(), 15_000);
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = ClientConfig::from_vars(Some("  ".into()), Some("abc".into()));
        assert_eq!(config, ClientConfig::default());

        let config = ClientConfig::from_vars(None, Some("0".into()));
        assert_eq!(config.timeout_ms(), 60_000);

        let config = ClientConfig::from_vars(None, None);
        assert_eq!(config, ClientConfig::default());
    }
}
