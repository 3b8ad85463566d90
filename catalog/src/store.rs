//! Catalog assembly and lookup.
//!
//! The catalog is built once at startup, either from the compiled-in era
//! providers or from a YAML file, and is read-only afterwards. Lookups never
//! fail: an era with no authored content simply has no regions.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::eras::all_providers;
use crate::error::CatalogError;
use crate::types::*;
use crate::validation::{check_painter, CatalogIssue};

/// The full course catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Eras in display order
    eras: Vec<Era>,
    /// Regions authored for each era
    #[serde(default)]
    courses: BTreeMap<EraId, Vec<Region>>,
}

impl Catalog {
    /// Assemble a catalog from parts.
    pub fn new(eras: Vec<Era>, courses: BTreeMap<EraId, Vec<Region>>) -> Self {
        Self { eras, courses }
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        let mut eras = Vec::new();
        let mut courses = BTreeMap::new();

        for provider in all_providers() {
            let era = provider.era();
            let regions = provider.default_regions();
            if !regions.is_empty() {
                courses.insert(era.id, regions);
            }
            eras.push(era);
        }

        Self { eras, courses }
    }

    /// Parse a catalog from YAML and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;

        let issues = catalog.validate();
        if !issues.is_empty() {
            return Err(CatalogError::Invalid(issues));
        }

        info!(
            eras = catalog.eras.len(),
            fingerprint = %catalog.fingerprint(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Read and validate a YAML catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading catalog file");
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Look up an era's metadata.
    pub fn get_era(&self, id: EraId) -> Option<&Era> {
        self.eras.iter().find(|era| era.id == id)
    }

    /// All eras in display order.
    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    /// The era shown when a session starts.
    pub fn default_era(&self) -> EraId {
        EraId::default()
    }

    /// Regions authored for an era, empty if there are none.
    pub fn get_regions(&self, era: EraId) -> &[Region] {
        self.courses
            .get(&era)
            .map(|regions| regions.as_slice())
            .unwrap_or(&[])
    }

    /// Regions for a raw era id. Unknown ids yield an empty slice.
    pub fn regions_for(&self, era: &str) -> &[Region] {
        era.parse::<EraId>()
            .map(|id| self.get_regions(id))
            .unwrap_or(&[])
    }

    /// Schools of an era, flattened across its regions.
    pub fn schools(&self, era: EraId) -> impl Iterator<Item = &School> {
        self.get_regions(era).iter().flat_map(|r| r.schools.iter())
    }

    /// Find a painter anywhere in the catalog.
    pub fn find_painter(&self, id: &str) -> Option<&Painter> {
        self.painters().find(|p| p.id == id)
    }

    /// Find a lesson anywhere in the catalog.
    pub fn find_lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.painters()
            .flat_map(|p| p.levels.iter())
            .flat_map(|l| l.lessons.iter())
            .find(|l| l.id == id)
    }

    /// Check the catalog against the structural rules.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for era in EraId::ALL {
            if self.get_era(era).is_none() {
                issues.push(CatalogIssue::MissingEra { era });
            }
        }

        let mut seen = HashSet::new();
        for painter in self.painters() {
            issues.extend(check_painter(painter, &mut seen));
        }

        issues
    }

    /// SHA-256 hex digest of the catalog content.
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};

        let json = serde_json::to_string(self).unwrap_or_default();
        hex::encode(Sha256::digest(json.as_bytes()))
    }

    fn painters(&self) -> impl Iterator<Item = &Painter> {
        self.courses
            .values()
            .flat_map(|regions| regions.iter())
            .flat_map(|r| r.schools.iter())
            .flat_map(|s| s.painters.iter())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
