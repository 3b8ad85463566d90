//! Course tree for the learn tab.

use serde::Serialize;

use catalog::{
    Catalog, EraId, Lesson, LessonId, LessonStatus, LevelProgress, MascotState, Painter, Region,
    School,
};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Horizontal offsets of path nodes, cycled by lesson index.
pub const PATH_OFFSETS: [i32; 4] = [0, -35, 35, 0];

const PURPLE_STROKE: &str = "#a855f7";
const BLUE_STROKE: &str = "#3b82f6";
const NEUTRAL_STROKE: &str = "#cbd5e1";

/// Connector stroke for a school's theme color tag.
pub fn stroke_color(school_color: &str) -> &'static str {
    if school_color.contains("purple") {
        PURPLE_STROKE
    } else if school_color.contains("blue") {
        BLUE_STROKE
    } else {
        NEUTRAL_STROKE
    }
}

/// One lesson node on a painter's path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PathNodeView {
    pub lesson_id: LessonId,
    pub name: String,
    pub icon: String,
    pub status: LessonStatus,
    pub stars: u8,
    pub is_boss: bool,
    pub x_offset: i32,
    pub is_first: bool,
    /// Offset of the previous node; `None` for the first node
    pub prev_x_offset: Option<i32>,
    pub stroke_color: String,
    /// Locked nodes do not react to taps
    pub clickable: bool,
    /// The "开始挑战" call-out over the active node
    pub show_start_bubble: bool,
}

impl PathNodeView {
    fn build(lesson: &Lesson, index: usize, stroke: &str) -> Self {
        let prev_x_offset = index
            .checked_sub(1)
            .map(|prev| PATH_OFFSETS[prev % PATH_OFFSETS.len()]);

        Self {
            lesson_id: lesson.id,
            name: lesson.name.clone(),
            icon: lesson.icon.clone(),
            status: lesson.status,
            stars: lesson.stars.get(),
            is_boss: lesson.is_boss,
            x_offset: PATH_OFFSETS[index % PATH_OFFSETS.len()],
            is_first: index == 0,
            prev_x_offset,
            stroke_color: stroke.to_string(),
            clickable: lesson.status != LessonStatus::Locked,
            show_start_bubble: lesson.status == LessonStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PainterCardView {
    pub painter_id: String,
    pub name: String,
    pub name_en: String,
    pub avatar: String,
    pub desc: String,
    pub mascot_state: MascotState,
    pub mascot_waving: bool,
    pub level_label: Option<String>,
    pub progress: Option<LevelProgress>,
    pub nodes: Vec<PathNodeView>,
}

impl PainterCardView {
    fn build(painter: &Painter, stroke: &str) -> Self {
        let level = painter.first_level();

        Self {
            painter_id: painter.id.clone(),
            name: painter.name.clone(),
            name_en: painter.name_en.clone(),
            avatar: painter.avatar.clone(),
            desc: painter.desc.clone(),
            mascot_state: painter.mascot_state,
            mascot_waving: painter.mascot_state == MascotState::Waving,
            level_label: level.map(|l| l.label.clone()),
            progress: level.map(|l| l.progress()),
            nodes: painter
                .representative_lessons()
                .iter()
                .enumerate()
                .map(|(index, lesson)| PathNodeView::build(lesson, index, stroke))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SchoolSectionView {
    pub school_id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub border_color: String,
    pub painters: Vec<PainterCardView>,
}

impl SchoolSectionView {
    fn build(school: &School) -> Self {
        let stroke = stroke_color(&school.color);

        Self {
            school_id: school.id.clone(),
            name: school.name.clone(),
            description: school.description.clone(),
            color: school.color.clone(),
            border_color: school.border_color.clone(),
            painters: school
                .painters
                .iter()
                .map(|p| PainterCardView::build(p, stroke))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RegionSectionView {
    pub region_id: String,
    pub name: String,
    pub flag: String,
    pub description: String,
    pub schools: Vec<SchoolSectionView>,
}

impl RegionSectionView {
    fn build(region: &Region) -> Self {
        Self {
            region_id: region.id.clone(),
            name: region.name.clone(),
            flag: region.flag.clone(),
            description: region.description.clone(),
            schools: region.schools.iter().map(SchoolSectionView::build).collect(),
        }
    }
}

/// The learn tab for one era.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct LearnView {
    pub era: EraId,
    pub regions: Vec<RegionSectionView>,
}

impl LearnView {
    pub fn build(catalog: &Catalog, era: EraId) -> Self {
        Self {
            era,
            regions: catalog
                .get_regions(era)
                .iter()
                .map(RegionSectionView::build)
                .collect(),
        }
    }

    /// No course content for this era.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
