//! Insight - AI art commentary for the Atelier art history app
//!
//! Provides on-demand commentary text for painters and artworks:
//! - Trait-based text backends (Gemini, mock)
//! - Degrade-gracefully client: fixed messages instead of errors
//! - Per-attempt timeout and a single retry on transient failures
//! - Per-overlay panel state with a re-entrancy guard
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            InsightClient                │
//! │  (timeout, retry, fallback messages)    │
//! └────────────────┬────────────────────────┘
//!                  │
//!      ┌───────────┴───────────┐
//!      ▼                       ▼
//! ┌─────────────┐       ┌─────────────┐
//! │ TextBackend │       │ InsightPanel│
//! │ (Gemini/    │       │ Idle→Loading│
//! │  Mock)      │       │ →Resolved   │
//! └─────────────┘       └─────────────┘
//! ```

pub mod backend;
pub mod client;
pub mod config;
pub mod panel;

// Re-export main types for convenience
pub use backend::traits::{BackendError, GenerationRequest, GenerationResponse, TextBackend};
pub use client::{
    ClientError, InsightClient, StartOutcome, EMPTY_RESPONSE_MESSAGE, FALLBACK_MESSAGE,
    NOT_CONFIGURED_MESSAGE,
};
pub use config::{ConfigError, InsightConfig};
pub use panel::{InsightPanel, InsightPhase, PanelError};
