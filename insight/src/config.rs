//! Configuration for the insight client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::gemini::{DEFAULT_MODEL, GEMINI_BASE_URL};

/// Environment variables checked for the provider credential, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Errors loading insight configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed YAML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Well-formed but unusable values
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the insight client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Provider credential. Never written back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Provider endpoint
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Per-attempt timeout (ms)
    pub timeout_ms: u64,
    /// Retries after a transient failure
    pub max_retries: u32,
    /// Cap on generated tokens; provider default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Sampling temperature (0.0-2.0); provider default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GEMINI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: 10_000,
            max_retries: 1,
            max_output_tokens: None,
            temperature: None,
        }
    }
}

impl InsightConfig {
    /// Default config with the credential taken from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Default config with the credential taken from `lookup`.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        Self {
            api_key,
            ..Default::default()
        }
    }

    /// Builder: set the credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder: set the endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether a non-empty credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }

    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the values make a usable client.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be positive".into()));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".into()));
        }
        if self.max_output_tokens == Some(0) {
            return Err(ConfigError::Invalid("max_output_tokens must be positive".into()));
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::Invalid(format!(
                    "temperature {} outside 0.0-2.0",
                    temperature
                )));
            }
        }
        Ok(())
    }

    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InsightConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.max_retries, 1);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_env_lookup_order() {
        let config = InsightConfig::from_env_with(|name| match name {
            "API_KEY" => Some("  ".to_string()),
            "GEMINI_API_KEY" => Some("gem-key".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("gem-key"));

        let config = InsightConfig::from_env_with(|_| None);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_yaml_never_writes_key() {
        let config = InsightConfig::default().with_api_key("secret");
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.contains("secret"));

        let parsed = InsightConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.model, DEFAULT_MODEL);
        assert!(parsed.api_key.is_none());
    }

    #[test]
    fn test_partial_yaml() {
        let parsed = InsightConfig::from_yaml("timeout_ms: 2500\n").unwrap();
        assert_eq!(parsed.timeout_ms, 2500);
        assert_eq!(parsed.base_url, GEMINI_BASE_URL);
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = InsightConfig::from_yaml("timeout_ms: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = InsightConfig::from_yaml("timeout_ms: [1\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_generation_settings() {
        let parsed = InsightConfig::from_yaml("max_output_tokens: 300\ntemperature: 0.7\n").unwrap();
        assert_eq!(parsed.max_output_tokens, Some(300));
        assert_eq!(parsed.temperature, Some(0.7));

        let result = InsightConfig::from_yaml("temperature: 3.5\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = InsightConfig::from_yaml("max_output_tokens: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let yaml = InsightConfig::default().to_yaml().unwrap();
        assert!(!yaml.contains("temperature"));
    }
}
