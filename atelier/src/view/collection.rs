//! Card decks for the collection tab.

use serde::Serialize;

use catalog::{Catalog, EraId, Lesson, LessonId, LessonStatus, School};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A collectible card. Only completed lessons reveal their artwork.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CardView {
    pub lesson_id: LessonId,
    pub unlocked: bool,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl CardView {
    fn build(lesson: &Lesson) -> Self {
        let unlocked = lesson.status == LessonStatus::Completed;

        Self {
            lesson_id: lesson.id,
            unlocked,
            name: unlocked.then(|| lesson.reward.name.clone()),
            image: unlocked.then(|| lesson.reward.image.clone()),
        }
    }
}

/// One deck per school.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct DeckView {
    pub school_id: String,
    pub name: String,
    pub color: String,
    pub completed: usize,
    pub total: usize,
    /// Share of unlocked cards, rounded
    pub percent: u32,
    pub cards: Vec<CardView>,
}

impl DeckView {
    fn build(school: &School) -> Self {
        let cards: Vec<CardView> = school
            .painters
            .iter()
            .flat_map(|p| p.representative_lessons())
            .map(CardView::build)
            .collect();

        let total = cards.len();
        let completed = cards.iter().filter(|c| c.unlocked).count();
        let percent = if total == 0 {
            0
        } else {
            (100.0 * completed as f64 / total as f64).round() as u32
        };

        Self {
            school_id: school.id.clone(),
            name: school.name.clone(),
            color: school.color.clone(),
            completed,
            total,
            percent,
            cards,
        }
    }
}

/// The collection tab for one era.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CollectionView {
    pub era: EraId,
    pub decks: Vec<DeckView>,
}

impl CollectionView {
    pub fn build(catalog: &Catalog, era: EraId) -> Self {
        Self {
            era,
            decks: catalog.schools(era).map(DeckView::build).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}
