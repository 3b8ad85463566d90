//! Mock text backend for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use super::traits::*;

/// Kind of failure a [`MockBackend`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Transport error (transient)
    Network,
    /// HTTP 503 (transient)
    ServerError,
    /// HTTP 400 (not transient)
    BadRequest,
    /// Malformed body (not transient)
    Malformed,
}

impl MockFailure {
    fn to_error(self) -> BackendError {
        match self {
            Self::Network => BackendError::NetworkError("Mock connection reset".to_string()),
            Self::ServerError => BackendError::RequestFailed {
                status: 503,
                body: "Mock service unavailable".to_string(),
            },
            Self::BadRequest => BackendError::RequestFailed {
                status: 400,
                body: "Mock bad request".to_string(),
            },
            Self::Malformed => BackendError::ParseError("Mock malformed body".to_string()),
        }
    }
}

/// Mock backend for testing.
///
/// Configurable responses, failures and latency for unit tests.
pub struct MockBackend {
    model_id: String,
    response_content: String,
    failure: Option<MockFailure>,
    failures_remaining: AtomicU32,
    delay: Option<Duration>,
    call_count: AtomicU32,
}

impl MockBackend {
    /// Create a new mock backend.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            response_content: "Mock insight".to_string(),
            failure: None,
            failures_remaining: AtomicU32::new(0),
            delay: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Set the response content.
    pub fn with_response(mut self, content: impl Into<String>) -> Self {
        self.response_content = content.into();
        self
    }

    /// Fail every call.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.failing_first(u32::MAX, failure)
    }

    /// Fail the first `times` calls, then succeed.
    pub fn failing_first(mut self, times: u32, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self.failures_remaining.store(times, Ordering::SeqCst);
        self
    }

    /// Sleep before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times generate was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new("mock-model")
    }
}

#[async_trait]
impl TextBackend for MockBackend {
    fn id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, _request: GenerationRequest) -> Result<GenerationResponse, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(failure) = self.failure {
            let should_fail = self
                .failures_remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if should_fail {
                return Err(failure.to_error());
            }
        }

        Ok(GenerationResponse {
            text: self.response_content.clone(),
            finish_reason: Some("STOP".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend() {
        let backend = MockBackend::new("test-model").with_response("Monet painted light.");

        assert_eq!(backend.call_count(), 0);

        let response = backend
            .generate(GenerationRequest::new("Monet"))
            .await
            .unwrap();

        assert_eq!(response.text, "Monet painted light.");
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_first() {
        let backend = MockBackend::default().failing_first(1, MockFailure::Network);

        assert!(backend.generate(GenerationRequest::new("a")).await.is_err());
        assert!(backend.generate(GenerationRequest::new("a")).await.is_ok());
        assert_eq!(backend.call_count(), 2);
    }
}
