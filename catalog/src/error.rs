//! Error types for catalog operations.

use crate::validation::CatalogIssue;

/// Error types for catalog loading and lookup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Era id outside the fixed era set
    #[error("Unknown era: {0}")]
    UnknownEra(String),

    /// Star rating outside 0..=3
    #[error("Star rating out of range: {0} (max 3)")]
    InvalidStars(u8),

    /// Catalog file could not be parsed
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog parsed but broke structural rules
    #[error("Catalog failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<CatalogIssue>),
}
