//! Error types for navigation.

use insight::PanelError;

use crate::navigation::InsightTarget;

/// Errors from navigation actions that can be refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The overlay owning the insight panel is not open
    #[error("No {0} overlay is open")]
    OverlayNotOpen(InsightTarget),

    /// The panel refused a second request
    #[error("Insight request refused: {0}")]
    Insight(#[from] PanelError),
}

/// Result type for navigation actions
pub type Result<T> = std::result::Result<T, NavigationError>;
