//! Renaissance era (14th to 16th century).

use crate::eras::EraProvider;
use crate::types::{Era, EraId, Region};

/// Provider for the Renaissance era. No courses are authored yet.
pub struct RenaissanceEra;

impl EraProvider for RenaissanceEra {
    fn era(&self) -> Era {
        Era {
            id: EraId::Renaissance,
            name: "文艺复兴".to_string(),
            range: "14-16世纪".to_string(),
            color: "bg-amber-700".to_string(),
        }
    }

    fn default_regions(&self) -> Vec<Region> {
        Vec::new()
    }
}
