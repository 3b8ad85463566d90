//! Overlay view models.

use serde::Serialize;

use catalog::{Catalog, EraId, LessonId, LessonReward, Painter};
use insight::InsightPanel;

use crate::quiz::{OptionFeedback, QuizSession};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Shown when a painting has no known location.
pub const PRIVATE_COLLECTION: &str = "私人收藏";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct EraOptionView {
    pub id: EraId,
    pub name: String,
    pub range: String,
    pub color: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct EraPickerView {
    pub options: Vec<EraOptionView>,
}

impl EraPickerView {
    pub fn build(catalog: &Catalog, active: EraId) -> Self {
        Self {
            options: catalog
                .eras()
                .iter()
                .map(|era| EraOptionView {
                    id: era.id,
                    name: era.name.clone(),
                    range: era.range.clone(),
                    color: era.color.clone(),
                    selected: era.id == active,
                })
                .collect(),
        }
    }
}

/// A biography timeline entry. `index` addresses `Painter::bio_events`
/// for opening the story.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct BioEntryView {
    pub index: usize,
    pub year: String,
    pub title: String,
    pub desc: String,
    pub image: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct WorkTileView {
    pub lesson_id: LessonId,
    pub name: String,
    pub image: String,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PainterProfileView {
    pub painter_id: String,
    pub name: String,
    pub name_en: String,
    pub avatar: String,
    pub desc: String,
    pub birth_place: Option<String>,
    pub lifespan: Option<String>,
    pub school_name: Option<String>,
    pub card_level: u8,
    pub insight: InsightPanel,
    pub bio: Vec<BioEntryView>,
    /// Rewards of the first level
    pub works: Vec<WorkTileView>,
}

impl PainterProfileView {
    pub fn build(painter: &Painter, insight: &InsightPanel) -> Self {
        Self {
            painter_id: painter.id.clone(),
            name: painter.name.clone(),
            name_en: painter.name_en.clone(),
            avatar: painter.avatar.clone(),
            desc: painter.desc.clone(),
            birth_place: painter.birth_place.clone(),
            lifespan: painter.lifespan.clone(),
            school_name: painter.school_name.clone(),
            card_level: painter.card_level,
            insight: insight.clone(),
            bio: painter
                .bio_events
                .iter()
                .enumerate()
                .map(|(index, event)| BioEntryView {
                    index,
                    year: event.year.clone(),
                    title: event.title.clone(),
                    desc: event.desc.clone(),
                    image: event.image.clone(),
                    caption: event.image_caption.clone(),
                })
                .collect(),
            works: painter
                .representative_lessons()
                .iter()
                .map(|lesson| WorkTileView {
                    lesson_id: lesson.id,
                    name: lesson.reward.name.clone(),
                    image: lesson.reward.image.clone(),
                    year: lesson.reward.year.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PaintingDetailView {
    pub name: String,
    pub name_en: Option<String>,
    pub image: String,
    pub year: Option<String>,
    pub location: String,
    pub material: Option<String>,
    pub dimensions: Option<String>,
    pub insight: InsightPanel,
}

impl PaintingDetailView {
    pub fn build(reward: &LessonReward, insight: &InsightPanel) -> Self {
        Self {
            name: reward.name.clone(),
            name_en: reward.name_en.clone(),
            image: reward.image.clone(),
            year: reward.year.clone(),
            location: reward
                .location
                .clone()
                .unwrap_or_else(|| PRIVATE_COLLECTION.to_string()),
            material: reward.material.clone(),
            dimensions: reward.dimensions.clone(),
            insight: insight.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct QuizOptionView {
    pub text: String,
    pub feedback: OptionFeedback,
}

/// The quiz overlay: a question being answered, or the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum QuizView {
    Question {
        target_name: String,
        index: usize,
        total: usize,
        progress: f32,
        text: String,
        options: Vec<QuizOptionView>,
        /// An option has been picked
        can_advance: bool,
        /// Label the advance button "完成" instead of "下一步"
        is_last: bool,
    },
    Result {
        target_name: String,
        score: u32,
        total: usize,
        percentage: u32,
    },
}

impl QuizView {
    pub fn build(session: &QuizSession) -> Self {
        let target_name = session.target().name().to_string();

        match session.current_question() {
            Some(question) => QuizView::Question {
                target_name,
                index: session.index(),
                total: session.total(),
                progress: session.progress(),
                text: question.text.clone(),
                options: question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, text)| QuizOptionView {
                        text: text.clone(),
                        feedback: session.option_feedback(i),
                    })
                    .collect(),
                can_advance: session.selected().is_some(),
                is_last: session.is_last_question(),
            },
            None => QuizView::Result {
                target_name,
                score: session.score(),
                total: session.total(),
                percentage: session.percentage(),
            },
        }
    }
}
