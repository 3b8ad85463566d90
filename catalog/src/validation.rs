//! Structural checks for hand-authored catalogs.
//!
//! Catalog data is written by hand, so the rules the course tree depends on
//! are checked here instead of being trusted: each level's lessons must read
//! `completed* active? locked*`, locked levels hold no active lesson, lesson
//! ids are unique, and every era in the fixed set is present.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{EraId, LessonId, LessonStatus, LevelStatus, Painter};

/// A single rule broken by a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// An era of the fixed set has no metadata
    MissingEra { era: EraId },
    /// More than one lesson in a level is active
    MultipleActiveLessons {
        painter_id: String,
        level_id: String,
        lessons: Vec<LessonId>,
    },
    /// A lesson is further along than the lesson before it
    StatusOutOfOrder {
        painter_id: String,
        level_id: String,
        lesson_id: LessonId,
    },
    /// A locked level contains an active lesson
    ActiveLessonInLockedLevel {
        painter_id: String,
        level_id: String,
        lesson_id: LessonId,
    },
    /// Two lessons share an id
    DuplicateLessonId { lesson_id: LessonId },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEra { era } => write!(f, "era {} has no metadata", era),
            Self::MultipleActiveLessons {
                painter_id,
                level_id,
                lessons,
            } => write!(
                f,
                "{}/{}: {} active lessons {:?}",
                painter_id,
                level_id,
                lessons.len(),
                lessons
            ),
            Self::StatusOutOfOrder {
                painter_id,
                level_id,
                lesson_id,
            } => write!(
                f,
                "{}/{}: lesson {} is ahead of the lesson before it",
                painter_id, level_id, lesson_id
            ),
            Self::ActiveLessonInLockedLevel {
                painter_id,
                level_id,
                lesson_id,
            } => write!(
                f,
                "{}/{}: lesson {} is active in a locked level",
                painter_id, level_id, lesson_id
            ),
            Self::DuplicateLessonId { lesson_id } => {
                write!(f, "lesson id {} is used more than once", lesson_id)
            }
        }
    }
}

/// Collect the issues for one painter's levels.
pub(crate) fn check_painter(painter: &Painter, seen: &mut HashSet<LessonId>) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for level in &painter.levels {
        let mut active = Vec::new();
        let mut previous: Option<LessonStatus> = None;

        for lesson in &level.lessons {
            if !seen.insert(lesson.id) {
                issues.push(CatalogIssue::DuplicateLessonId {
                    lesson_id: lesson.id,
                });
            }

            if lesson.status == LessonStatus::Active {
                active.push(lesson.id);
                if level.status == LevelStatus::Locked {
                    issues.push(CatalogIssue::ActiveLessonInLockedLevel {
                        painter_id: painter.id.clone(),
                        level_id: level.id.clone(),
                        lesson_id: lesson.id,
                    });
                }
            }

            // A later lesson is never further along than the one before it
            if let Some(prev) = previous {
                if !lesson.status.can_transition_to(prev) {
                    issues.push(CatalogIssue::StatusOutOfOrder {
                        painter_id: painter.id.clone(),
                        level_id: level.id.clone(),
                        lesson_id: lesson.id,
                    });
                }
            }
            previous = Some(lesson.status);
        }

        if active.len() > 1 {
            issues.push(CatalogIssue::MultipleActiveLessons {
                painter_id: painter.id.clone(),
                level_id: level.id.clone(),
                lessons: active,
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Lesson, LessonReward, Level, MascotState, Stars};

    fn painter_with(statuses: &[LessonStatus], level_status: LevelStatus) -> Painter {
        let lessons = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| Lesson {
                id: i as LessonId + 1,
                name: format!("lesson-{}", i + 1),
                status: *status,
                stars: Stars::default(),
                icon: "*".to_string(),
                reward: LessonReward::painting("p", "*"),
                is_boss: false,
            })
            .collect();

        Painter {
            id: "painter-test".to_string(),
            name: "Test".to_string(),
            name_en: "Test".to_string(),
            avatar: "*".to_string(),
            desc: "".to_string(),
            birth_place: None,
            lifespan: None,
            school_name: None,
            mascot_state: MascotState::Active,
            card_level: 1,
            bio_events: vec![],
            levels: vec![Level {
                id: "lvl-1".to_string(),
                name: "Beginner".to_string(),
                label: "Test".to_string(),
                status: level_status,
                lessons,
            }],
        }
    }

    #[test]
    fn test_well_formed_level() {
        use LessonStatus::*;
        let painter = painter_with(&[Completed, Completed, Active, Locked], LevelStatus::Active);
        assert!(check_painter(&painter, &mut HashSet::new()).is_empty());
    }

    #[test]
    fn test_two_active_lessons() {
        use LessonStatus::*;
        let painter = painter_with(&[Completed, Active, Active], LevelStatus::Active);
        let issues = check_painter(&painter, &mut HashSet::new());

        assert_eq!(
            issues,
            vec![CatalogIssue::MultipleActiveLessons {
                painter_id: "painter-test".to_string(),
                level_id: "lvl-1".to_string(),
                lessons: vec![2, 3],
            }]
        );
    }

    #[test]
    fn test_completed_after_locked() {
        use LessonStatus::*;
        let painter = painter_with(&[Locked, Completed], LevelStatus::Active);
        let issues = check_painter(&painter, &mut HashSet::new());

        assert!(matches!(
            issues.as_slice(),
            [CatalogIssue::StatusOutOfOrder { lesson_id: 2, .. }]
        ));
    }

    #[test]
    fn test_active_after_locked() {
        use LessonStatus::*;
        let painter = painter_with(&[Completed, Locked, Active], LevelStatus::Active);
        let issues = check_painter(&painter, &mut HashSet::new());

        assert!(matches!(
            issues.as_slice(),
            [CatalogIssue::StatusOutOfOrder { lesson_id: 3, .. }]
        ));
    }

    #[test]
    fn test_active_in_locked_level() {
        use LessonStatus::*;
        let painter = painter_with(&[Active, Locked], LevelStatus::Locked);
        let issues = check_painter(&painter, &mut HashSet::new());

        assert!(matches!(
            issues.as_slice(),
            [CatalogIssue::ActiveLessonInLockedLevel { lesson_id: 1, .. }]
        ));
    }

    #[test]
    fn test_duplicate_ids_across_painters() {
        use LessonStatus::*;
        let mut seen = HashSet::new();
        let painter = painter_with(&[Completed], LevelStatus::Active);

        assert!(check_painter(&painter, &mut seen).is_empty());
        let issues = check_painter(&painter, &mut seen);
        assert_eq!(issues, vec![CatalogIssue::DuplicateLessonId { lesson_id: 1 }]);
    }
}
