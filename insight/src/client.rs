//! InsightClient - on-demand art commentary.
//!
//! The feature is decorative, so the client never surfaces an error:
//! every failure degrades to a fixed message the UI can show as-is.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::backend::gemini::GeminiBackend;
use crate::backend::traits::{BackendError, GenerationRequest, TextBackend};
use crate::config::{ConfigError, InsightConfig};
use crate::panel::{InsightPanel, PanelError};

/// Shown when no credential is configured. No call is attempted.
pub const NOT_CONFIGURED_MESSAGE: &str = "API key not configured.";

/// Shown when the provider answered with no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "No response from AI.";

/// Shown when the call failed for any reason.
pub const FALLBACK_MESSAGE: &str = "抱歉，AI 鉴赏助手暂时休息了。";

/// Result of starting a request on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The panel already holds its final text
    Resolved,
    /// The panel is loading; call [`InsightClient::fetch_insight`] next
    Pending,
}

/// Errors building an [`InsightClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configuration is unusable
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The backend could not be constructed
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Client for the remote text-generation service.
#[derive(Clone)]
pub struct InsightClient {
    backend: Option<Arc<dyn TextBackend>>,
    config: InsightConfig,
}

impl InsightClient {
    /// Build a client from config. Without a credential the client is
    /// unconfigured and never calls out.
    pub fn from_config(config: InsightConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let backend: Option<Arc<dyn TextBackend>> = match config.api_key.as_deref() {
            Some(key) if config.is_configured() => Some(Arc::new(GeminiBackend::new(
                &config.base_url,
                &config.model,
                key,
            )?)),
            _ => None,
        };

        info!(
            configured = backend.is_some(),
            model = %config.model,
            "Insight client ready"
        );

        Ok(Self { backend, config })
    }

    /// A client with no credential.
    pub fn unconfigured() -> Self {
        Self {
            backend: None,
            config: InsightConfig::default(),
        }
    }

    /// A client over an explicit backend.
    pub fn with_backend(backend: Arc<dyn TextBackend>, config: InsightConfig) -> Self {
        Self {
            backend: Some(backend),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// The answer available without calling out, if any.
    pub fn immediate(&self) -> Option<&'static str> {
        if self.backend.is_none() {
            Some(NOT_CONFIGURED_MESSAGE)
        } else {
            None
        }
    }

    /// Start a request on a panel.
    ///
    /// Unconfigured clients resolve the panel on the spot, so no loading
    /// phase is ever observed.
    pub fn start(&self, panel: &mut InsightPanel) -> Result<StartOutcome, PanelError> {
        match self.immediate() {
            Some(message) => {
                panel.resolve_immediately(message)?;
                Ok(StartOutcome::Resolved)
            }
            None => {
                panel.begin()?;
                Ok(StartOutcome::Pending)
            }
        }
    }

    /// Fetch commentary for a topic. Never fails.
    pub async fn fetch_insight(&self, topic: &str) -> String {
        let Some(backend) = &self.backend else {
            return NOT_CONFIGURED_MESSAGE.to_string();
        };

        let request_id = uuid::Uuid::new_v4();
        debug!(%request_id, backend = backend.id(), topic, "Requesting insight");

        match self.generate_with_retry(backend.as_ref(), topic).await {
            Ok(text) if text.trim().is_empty() => {
                debug!(%request_id, "Provider returned no text");
                EMPTY_RESPONSE_MESSAGE.to_string()
            }
            Ok(text) => text,
            Err(e) => {
                warn!(%request_id, error = %e, "Insight request failed");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    /// Call the backend with a per-attempt timeout, retrying transient failures.
    async fn generate_with_retry(
        &self,
        backend: &dyn TextBackend,
        topic: &str,
    ) -> Result<String, BackendError> {
        let mut request = GenerationRequest::new(build_prompt(topic));
        if let Some(max) = self.config.max_output_tokens {
            request = request.with_max_output_tokens(max);
        }
        if let Some(temperature) = self.config.temperature {
            request = request.with_temperature(temperature);
        }
        let mut attempt = 0;

        loop {
            let result = tokio::time::timeout(self.config.timeout(), backend.generate(request.clone()))
                .await
                .unwrap_or(Err(BackendError::Timeout(self.config.timeout_ms)));

            match result {
                Ok(response) => return Ok(response.text),
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    debug!(attempt, error = %e, "Retrying insight request");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Prompt sent to the provider for a topic.
pub fn build_prompt(topic: &str) -> String {
    format!(
        "You are an expert art historian. Provide a concise, engaging, and professional \
         100-word insight about the following art history topic in Chinese: {}. \
         Focus on style, significance, and a fun fact.",
        topic
    )
}
