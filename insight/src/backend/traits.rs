//! Core traits for text generation backends.
//!
//! This module defines the `TextBackend` trait - the abstraction over the
//! remote generative-text provider used for art commentary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error types for backend calls.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Backend could not be constructed or is disabled
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Transport failure before a response arrived
    #[error("Network error: {0}")]
    NetworkError(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// Provider answered with a non-success status
    #[error("Request failed with HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Rate limited by the provider
    #[error("Rate limited by provider")]
    RateLimited,

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl BackendError {
    /// Whether a retry has a reasonable chance of succeeding.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NetworkError(_) | Self::Timeout(_) | Self::RateLimited => true,
            Self::RequestFailed { status, .. } => *status >= 500,
            Self::Unavailable(_) | Self::ParseError(_) => false,
        }
    }
}

/// Core trait for text generation backends.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Get the backend identifier (e.g., model name).
    fn id(&self) -> &str;

    /// Generate text for a single prompt.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, BackendError>;
}

/// A one-shot generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Natural-language prompt
    pub prompt: String,
    /// Maximum tokens to generate
    pub max_output_tokens: Option<u32>,
    /// Temperature (0.0-2.0)
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Create a request for a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Set max output tokens.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Set temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp.clamp(0.0, 2.0));
        self
    }
}

/// Text returned by a backend. `text` may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text
    pub text: String,
    /// Provider-reported stop reason, if any
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(BackendError::NetworkError("reset".into()).is_transient());
        assert!(BackendError::Timeout(10_000).is_transient());
        assert!(BackendError::RateLimited.is_transient());
        assert!(BackendError::RequestFailed { status: 503, body: String::new() }.is_transient());

        assert!(!BackendError::RequestFailed { status: 400, body: String::new() }.is_transient());
        assert!(!BackendError::ParseError("no candidates".into()).is_transient());
        assert!(!BackendError::Unavailable("disabled".into()).is_transient());
    }

    #[test]
    fn test_temperature_clamped() {
        let request = GenerationRequest::new("topic").with_temperature(5.0);
        assert_eq!(request.temperature, Some(2.0));
    }
}
