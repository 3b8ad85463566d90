//! Core types for the course catalog.
//!
//! The catalog is a strict ownership tree: an era's regions own schools,
//! schools own painters, painters own levels, levels own lessons, and each
//! lesson owns its reward. Nothing is shared or back-referenced.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs for the rendering shell.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Numeric lesson identifier, unique across the catalog.
pub type LessonId = u32;

/// Historical period at the top of the course tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum EraId {
    #[serde(rename = "renaissance")]
    Renaissance,
    #[serde(rename = "19th_century")]
    NineteenthCentury,
    #[serde(rename = "modern")]
    Modern,
}

impl EraId {
    /// All eras in display order.
    pub const ALL: [EraId; 3] = [Self::Renaissance, Self::NineteenthCentury, Self::Modern];

    /// Stable string id, as used in data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Renaissance => "renaissance",
            Self::NineteenthCentury => "19th_century",
            Self::Modern => "modern",
        }
    }
}

impl Default for EraId {
    fn default() -> Self {
        Self::NineteenthCentury
    }
}

impl fmt::Display for EraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EraId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|era| era.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownEra(s.to_string()))
    }
}

/// An era with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Era {
    pub id: EraId,
    /// Display name
    pub name: String,
    /// Display date range, e.g. "1860-1900"
    pub range: String,
    /// Theme color tag
    pub color: String,
}

/// A geographic grouping of schools within an era.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Region {
    pub id: String,
    pub name: String,
    /// Flag glyph
    pub flag: String,
    pub description: String,
    pub schools: Vec<School>,
}

/// An art movement grouping painters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct School {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Primary theme color tag
    pub color: String,
    /// Border theme color tag
    pub border_color: String,
    pub painters: Vec<Painter>,
}

/// Animation state of a painter's mascot on the course tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum MascotState {
    #[default]
    Active,
    Waving,
    Sleeping,
}

/// A painter and their course content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Painter {
    pub id: String,
    /// Localized name
    pub name: String,
    /// Latin-script name
    pub name_en: String,
    /// Avatar glyph
    pub avatar: String,
    /// Short descriptor
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default)]
    pub mascot_state: MascotState,
    pub card_level: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bio_events: Vec<BioEvent>,
    pub levels: Vec<Level>,
}

impl Painter {
    /// The first level, which the course tree and profile display.
    pub fn first_level(&self) -> Option<&Level> {
        self.levels.first()
    }

    /// Lessons of the first level; their rewards are the painter's
    /// representative works.
    pub fn representative_lessons(&self) -> &[Lesson] {
        self.first_level()
            .map(|level| level.lessons.as_slice())
            .unwrap_or(&[])
    }
}

/// A biographical milestone. Also the target of the story reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct BioEvent {
    /// Year label
    pub year: String,
    pub title: String,
    pub desc: String,
    /// Illustrative glyph
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<String>,
}

/// Unlock status of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum LevelStatus {
    Active,
    Locked,
    Completed,
}

/// A level groups an ordered run of lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Level {
    pub id: String,
    pub name: String,
    pub label: String,
    pub status: LevelStatus,
    pub lessons: Vec<Lesson>,
}

impl Level {
    /// Derive the progress cursor from lesson statuses.
    pub fn progress(&self) -> LevelProgress {
        LevelProgress {
            total: self.lessons.len(),
            completed_count: self
                .lessons
                .iter()
                .filter(|l| l.status == LessonStatus::Completed)
                .count(),
            active: self
                .lessons
                .iter()
                .find(|l| l.status == LessonStatus::Active)
                .map(|l| l.id),
        }
    }
}

/// Progress through a level, computed from its lessons rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct LevelProgress {
    pub total: usize,
    pub completed_count: usize,
    /// The lesson currently open for play, if any
    pub active: Option<LessonId>,
}

impl LevelProgress {
    /// Whether every lesson in the level is completed.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed_count == self.total
    }
}

/// Status of a single lesson.
///
/// Transitions only move forward: `Locked -> Active -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Completed,
    Active,
    Locked,
}

impl LessonStatus {
    /// Position along the unlock direction (higher = further along).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Locked => 0,
            Self::Active => 1,
            Self::Completed => 2,
        }
    }

    /// Check if moving to `next` keeps the transition monotonic.
    pub fn can_transition_to(&self, next: LessonStatus) -> bool {
        next.rank() >= self.rank()
    }
}

/// Star rating for a lesson, always within `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const MAX: u8 = 3;

    pub fn new(value: u8) -> Result<Self, CatalogError> {
        if value > Self::MAX {
            return Err(CatalogError::InvalidStars(value));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Stars {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}

/// A single quiz-gated unit tied to one artwork reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Lesson {
    pub id: LessonId,
    pub name: String,
    pub status: LessonStatus,
    pub stars: Stars,
    /// Icon glyph
    pub icon: String,
    pub reward: LessonReward,
    #[serde(default)]
    pub is_boss: bool,
}

/// What a reward unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Painting,
    Fragment,
}

/// The artwork or fragment record unlocked by completing a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct LessonReward {
    pub kind: RewardKind,
    /// Localized name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    /// Image glyph
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    /// Fragments collected so far (fragment rewards only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Fragments needed to complete the piece
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

impl LessonReward {
    /// A painting reward with just the required fields set.
    pub fn painting(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            kind: RewardKind::Painting,
            name: name.into(),
            name_en: None,
            image: image.into(),
            year: None,
            location: None,
            material: None,
            dimensions: None,
            count: None,
            total: None,
        }
    }

    /// Builder: set the Latin-script name.
    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    /// Builder: set the year label.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Builder: set the holding location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder: set the material.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }
}
