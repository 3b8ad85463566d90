//! Modern art era (early 20th century).

use crate::eras::EraProvider;
use crate::types::{Era, EraId, Region};

/// Provider for the modern era. No courses are authored yet.
pub struct ModernEra;

impl EraProvider for ModernEra {
    fn era(&self) -> Era {
        Era {
            id: EraId::Modern,
            name: "现代艺术".to_string(),
            range: "20世纪初".to_string(),
            color: "bg-blue-600".to_string(),
        }
    }

    fn default_regions(&self) -> Vec<Region> {
        Vec::new()
    }
}
