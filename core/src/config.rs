//! Load test configuration types

use serde::{Deserialize, Serialize};

/// Load test configuration
///
/// Defines what to hit and how hard: the target URL, the exact number of
/// GET requests to issue, and how many workers share that work. Built once
/// by the caller and only read by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTestConfig {
    /// Endpoint every request is sent to
    pub target_url: String,

    /// Total number of requests across all workers
    pub total_requests: usize,

    /// Number of concurrent worker tasks
    pub concurrency: usize,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            target_url: String::new(),
            total_requests: 100,
            concurrency: 10,
        }
    }
}

impl LoadTestConfig {
    /// Create a new config targeting the given URL
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            ..Default::default()
        }
    }

    /// Set the total request count
    pub fn with_requests(mut self, total_requests: usize) -> Self {
        self.total_requests = total_requests;
        self
    }

    /// Set the concurrency level
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl);
        }

        match reqwest::Url::parse(&self.target_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            Ok(url) => {
                return Err(ConfigError::InvalidUrl(format!(
                    "unsupported URL `{}` (expected an http or https URL with a host)",
                    url
                )));
            }
            Err(e) => {
                return Err(ConfigError::InvalidUrl(format!(
                    "`{}`: {}",
                    self.target_url, e
                )));
            }
        }

        if self.total_requests == 0 {
            return Err(ConfigError::InvalidRequestCount(
                "request count must be at least 1".into(),
            ));
        }

        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency(
                "concurrency must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No target URL was given
    #[error("URL is required")]
    EmptyUrl,

    /// Target URL is not a usable http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid request count
    #[error("Invalid request count: {0}")]
    InvalidRequestCount(String),

    /// Invalid concurrency value
    #[error("Invalid concurrency: {0}")]
    InvalidConcurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoadTestConfig::default();
        assert!(config.target_url.is_empty());
        assert_eq!(config.total_requests, 100);
        assert_eq!(config.concurrency, 10);
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = LoadTestConfig::new("http://localhost:8080/health")
            .with_requests(1000)
            .with_concurrency(50);

        assert_eq!(config.target_url, "http://localhost:8080/health");
        assert_eq!(config.total_requests, 1000);
        assert_eq!(config.concurrency, 50);
    }

    #[test]
    fn test_config_validation_valid() {
        let config = LoadTestConfig::new("https://example.com")
            .with_requests(10)
            .with_concurrency(3);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_url() {
        assert_eq!(
            LoadTestConfig::default().validate(),
            Err(ConfigError::EmptyUrl)
        );
        assert_eq!(
            LoadTestConfig::new("   ").validate(),
            Err(ConfigError::EmptyUrl)
        );
    }

    #[test]
    fn test_config_validation_unparseable_url() {
        let result = LoadTestConfig::new("not a url").validate();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_config_validation_non_http_scheme() {
        let result = LoadTestConfig::new("ftp://example.com/file").validate();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_config_validation_zero_requests() {
        let config = LoadTestConfig::new("http://localhost").with_requests(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRequestCount(_))
        ));
    }

    #[test]
    fn test_config_validation_zero_concurrency() {
        let config = LoadTestConfig::new("http://localhost").with_concurrency(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConcurrency(_))
        ));
    }

    #[test]
    fn test_concurrency_need_not_divide_requests() {
        let config = LoadTestConfig::new("http://localhost")
            .with_requests(7)
            .with_concurrency(3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = LoadTestConfig::new("http://localhost:3000")
            .with_requests(5)
            .with_concurrency(2);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LoadTestConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, config);
    }
}
