//! Per-overlay insight state.
//!
//! A panel moves `Idle -> Loading -> Resolved` once. It refuses a second
//! request while one is in flight or after it resolved.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Phase of an insight panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "phase", content = "text", rename_all = "lowercase")]
pub enum InsightPhase {
    #[default]
    Idle,
    Loading,
    Resolved(String),
}

/// Why a panel refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("An insight request is already in flight")]
    AlreadyLoading,

    #[error("Insight already resolved")]
    AlreadyResolved,
}

/// Insight state for one overlay instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct InsightPanel {
    topic: String,
    phase: InsightPhase,
}

impl InsightPanel {
    /// Create an idle panel for a topic.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            phase: InsightPhase::Idle,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn phase(&self) -> &InsightPhase {
        &self.phase
    }

    /// Resolved text, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.phase {
            InsightPhase::Resolved(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == InsightPhase::Loading
    }

    /// Whether the "get insight" action should be offered.
    pub fn can_request(&self) -> bool {
        self.phase == InsightPhase::Idle
    }

    /// Move from `Idle` to `Loading`.
    pub fn begin(&mut self) -> Result<(), PanelError> {
        self.guard()?;
        self.phase = InsightPhase::Loading;
        Ok(())
    }

    /// Move from `Loading` to `Resolved`. Returns false in any other phase.
    pub fn resolve(&mut self, text: impl Into<String>) -> bool {
        if self.phase != InsightPhase::Loading {
            return false;
        }
        self.phase = InsightPhase::Resolved(text.into());
        true
    }

    /// Move straight from `Idle` to `Resolved`, skipping `Loading`.
    pub fn resolve_immediately(&mut self, text: impl Into<String>) -> Result<(), PanelError> {
        self.guard()?;
        self.phase = InsightPhase::Resolved(text.into());
        Ok(())
    }

    fn guard(&self) -> Result<(), PanelError> {
        match self.phase {
            InsightPhase::Idle => Ok(()),
            InsightPhase::Loading => Err(PanelError::AlreadyLoading),
            InsightPhase::Resolved(_) => Err(PanelError::AlreadyResolved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_lifecycle() {
        let mut panel = InsightPanel::new("Monet");
        assert!(panel.can_request());

        panel.begin().unwrap();
        assert!(panel.is_loading());
        assert_eq!(panel.begin(), Err(PanelError::AlreadyLoading));

        assert!(panel.resolve("light"));
        assert_eq!(panel.text(), Some("light"));
        assert_eq!(panel.begin(), Err(PanelError::AlreadyResolved));
        assert!(!panel.resolve("again"));
        assert_eq!(panel.text(), Some("light"));
    }

    #[test]
    fn test_resolve_requires_loading() {
        let mut panel = InsightPanel::new("Monet");
        assert!(!panel.resolve("early"));
        assert_eq!(panel.phase(), &InsightPhase::Idle);
    }

    #[test]
    fn test_phase_serialization() {
        let json = serde_json::to_value(InsightPhase::Resolved("x".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "phase": "resolved", "text": "x" }));
    }
}
