//! Monitor configuration
//!
//! All timings are configurable to allow tuning for different deployments
//! (local backend vs remote, fast vs slow networks).

use std::time::Duration;

/// Monitor configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL (e.g. "http://localhost:8000")
    pub backend_url: String,

    /// How often to poll the dashboard snapshot
    pub poll_interval: Duration,

    /// Backoff retries after consecutive poll failures
    pub max_retries: u32,

    /// Base delay of the backoff series
    pub retry_base_delay: Duration,

    /// Hard deadline per dashboard fetch
    pub request_timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.is_empty() {
            anyhow::bail!("backend_url cannot be empty");
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            anyhow::bail!("backend_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            poll_interval: Duration::from_millis(2000),
            max_retries: 5,
            retry_base_delay: Duration::from_millis(1000),
            request_timeout: Duration::from_millis(10_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_millis(2000));
        assert_eq!(config.max_retries, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.backend_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "http://localhost:8000".to_string();
        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
