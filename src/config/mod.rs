use std::time::Duration;

use garde::Validate;
use serde::Deserialize;

use crate::services::pipeline::PipelineConfig;
use crate::services::transport::WebhookMethod;

#[derive(Debug, Deserialize, Validate)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000"). Unused by the probe binary.
    #[serde(default = "default_bind_addr")]
    #[garde(length(min = 1))]
    pub bind_addr: String,

    /// Workflow-automation webhook receiving signups
    #[garde(url)]
    pub webhook_url: String,

    /// `post` (JSON body) or `get` (query parameters)
    #[serde(default)]
    #[garde(skip)]
    pub webhook_method: WebhookMethod,

    /// Per-attempt timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    #[garde(range(min = 1))]
    pub timeout_ms: u64,

    /// Total delivery attempts, including the first
    #[serde(default = "default_retry_attempts")]
    #[garde(range(min = 1, max = 10))]
    pub retry_attempts: u32,

    /// Base backoff delay in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    #[garde(skip)]
    pub retry_delay_ms: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1_000
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load from explicit key/value pairs (upper-case keys, as in the environment).
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            timeout: Duration::from_millis(self.timeout_ms),
            retry_attempts: self.retry_attempts,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] garde::Report),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config =
            AppConfig::from_vars(vars(&[("WEBHOOK_URL", "http://localhost:5678/webhook/research")]))
                .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.webhook_method, WebhookMethod::Post);

        let pipeline = config.pipeline();
        assert_eq!(pipeline.timeout, Duration::from_secs(30));
        assert_eq!(pipeline.retry_attempts, 3);
        assert_eq!(pipeline.retry_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_vars(vars(&[
            ("WEBHOOK_URL", "https://n8n.example.com/webhook/research"),
            ("WEBHOOK_METHOD", "get"),
            ("TIMEOUT_MS", "120000"),
            ("RETRY_ATTEMPTS", "5"),
            ("RETRY_DELAY_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.webhook_method, WebhookMethod::Get);
        assert_eq!(config.pipeline().timeout, Duration::from_secs(120));
        assert_eq!(config.pipeline().retry_attempts, 5);
    }

    #[test]
    fn test_missing_webhook_url() {
        let err = AppConfig::from_vars(vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = AppConfig::from_vars(vars(&[("WEBHOOK_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AppConfig::from_vars(vars(&[
            ("WEBHOOK_URL", "http://localhost:5678/webhook"),
            ("RETRY_ATTEMPTS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
