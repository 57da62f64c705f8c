use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    /// Timeout for the liveness ping against the root path.
    pub health_timeout: Duration,
    /// Timeout for classification probes; inference may be slow.
    pub probe_timeout: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            health_timeout: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(30),
        }
    }
}

impl EndpointConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("Base URL must start with http:// or https://".to_string());
        }

        if self.health_timeout.is_zero() {
            return Err("Health timeout must be greater than 0".to_string());
        }

        if self.probe_timeout.is_zero() {
            return Err("Probe timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EndpointConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.health_timeout, Duration::from_secs(5));
        assert_eq!(config.probe_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EndpointConfig::new()
            .with_base_url("https://emotion.example.com")
            .with_health_timeout(Duration::from_secs(2))
            .with_probe_timeout(Duration::from_secs(10));

        assert_eq!(config.base_url, "https://emotion.example.com");
        assert_eq!(config.health_timeout, Duration::from_secs(2));
        assert_eq!(config.probe_timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = EndpointConfig::default();

        config.base_url = "".to_string();
        assert!(config.validate().is_err());

        config.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:5000".to_string();
        config.health_timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());

        config.health_timeout = Duration::from_secs(5);
        config.probe_timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = EndpointConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EndpointConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.base_url, deserialized.base_url);
        assert_eq!(config.probe_timeout, deserialized.probe_timeout);
    }
}
