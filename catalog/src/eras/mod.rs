//! Era definitions.
//!
//! Each era provides its display metadata and the regions authored for it.
//! Eras without authored content return no regions.

pub mod modern;
pub mod nineteenth_century;
pub mod renaissance;

pub use modern::ModernEra;
pub use nineteenth_century::NineteenthCenturyEra;
pub use renaissance::RenaissanceEra;

use crate::types::{Era, Region};

/// Trait for era-specific course content.
pub trait EraProvider: Send + Sync {
    /// Get the era this provider handles
    fn era(&self) -> Era;

    /// Get the built-in regions for this era
    fn default_regions(&self) -> Vec<Region>;
}

/// Providers for every era, in display order.
pub fn all_providers() -> Vec<Box<dyn EraProvider>> {
    vec![
        Box::new(RenaissanceEra),
        Box::new(NineteenthCenturyEra),
        Box::new(ModernEra),
    ]
}
