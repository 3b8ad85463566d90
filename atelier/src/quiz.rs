//! Quiz engine.
//!
//! A quiz is a fixed, ordered list of questions played front to back. The
//! first option picked for a question is binding, and the score only ever
//! grows. Once the last question is passed the session shows its result and
//! can only be finished.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog::{Lesson, LessonReward, LessonStatus};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Number of questions in a generated quiz.
pub const QUESTIONS_PER_QUIZ: usize = 3;

/// What a quiz is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum QuizTarget {
    /// Started from a painting detail overlay
    Reward(LessonReward),
    /// Started from a node on the course path
    Lesson(Lesson),
}

impl QuizTarget {
    /// Display name used in questions and summaries.
    pub fn name(&self) -> &str {
        match self {
            Self::Reward(reward) => &reward.name,
            Self::Lesson(lesson) => &lesson.name,
        }
    }

    /// Locked lessons cannot be played.
    pub fn is_playable(&self) -> bool {
        match self {
            Self::Reward(_) => true,
            Self::Lesson(lesson) => lesson.status != LessonStatus::Locked,
        }
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct QuizQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    /// Index of the correct option
    pub answer: usize,
}

impl QuizQuestion {
    /// The standard three-question quiz about a target.
    pub fn template_for(target_name: &str) -> Vec<QuizQuestion> {
        let options =
            |items: [&str; 4]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

        vec![
            QuizQuestion {
                id: 1,
                text: format!("关于 {}，最显著的风格特征是？", target_name),
                options: options(["严谨古典", "光影瞬间", "抽象表现", "极简主义"]),
                answer: 1,
            },
            QuizQuestion {
                id: 2,
                text: "该流派起源于以下哪个国家？".to_string(),
                options: options(["英国", "法国", "荷兰", "意大利"]),
                answer: 1,
            },
            QuizQuestion {
                id: 3,
                text: "这类作品通常在哪里创作？".to_string(),
                options: options(["室内画室", "户外写生", "宫廷", "修道院"]),
                answer: 1,
            },
        ]
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    Answering,
    ShowResult,
}

/// How an option should be presented after answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum OptionFeedback {
    /// Not answered yet, or an unpicked wrong option
    Neutral,
    /// Picked and right
    Correct,
    /// Picked and wrong
    Incorrect,
    /// Not picked, but the right answer once another option was picked
    RevealedCorrect,
}

/// Result handed back when a quiz is finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct QuizSummary {
    pub target_name: String,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    #[cfg_attr(feature = "typescript", ts(type = "string"))]
    pub finished_at: DateTime<Utc>,
}

/// A quiz in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    target: QuizTarget,
    questions: Vec<QuizQuestion>,
    index: usize,
    selected: Option<usize>,
    score: u32,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start the standard quiz for a target.
    pub fn new(target: QuizTarget) -> Self {
        let questions = QuizQuestion::template_for(target.name());
        Self::with_questions(target, questions)
    }

    /// Start a quiz over explicit questions.
    pub fn with_questions(target: QuizTarget, questions: Vec<QuizQuestion>) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::ShowResult
        } else {
            QuizPhase::Answering
        };

        Self {
            target,
            questions,
            index: 0,
            selected: None,
            score: 0,
            phase,
        }
    }

    pub fn target(&self) -> &QuizTarget {
        &self.target
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::ShowResult
    }

    /// Zero-based index of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The question being answered, `None` once the result is shown.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Answering => self.questions.get(self.index),
            QuizPhase::ShowResult => None,
        }
    }

    /// Option picked for the current question.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// `round(100 * score / total)`, zero for an empty quiz.
    pub fn percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (100.0 * self.score as f64 / self.questions.len() as f64).round() as u32
    }

    /// Fill of the progress bar, counting the current question.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 1.0;
        }
        (self.index + 1) as f32 / self.questions.len() as f32
    }

    /// Pick an option for the current question.
    ///
    /// Returns false without changing anything if an option was already
    /// picked, the index is out of range, or the result is showing.
    pub fn select_option(&mut self, option: usize) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if self.selected.is_some() || option >= question.options.len() {
            return false;
        }

        let correct = option == question.answer;
        self.selected = Some(option);
        if correct {
            self.score += 1;
        }
        true
    }

    /// Move past the current question once it has been answered.
    pub fn advance(&mut self) -> bool {
        if self.phase != QuizPhase::Answering || self.selected.is_none() {
            return false;
        }

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
        } else {
            self.phase = QuizPhase::ShowResult;
        }
        true
    }

    /// Presentation of option `option` for the current question.
    pub fn option_feedback(&self, option: usize) -> OptionFeedback {
        let (Some(question), Some(selected)) = (self.current_question(), self.selected) else {
            return OptionFeedback::Neutral;
        };

        if option == selected {
            if option == question.answer {
                OptionFeedback::Correct
            } else {
                OptionFeedback::Incorrect
            }
        } else if option == question.answer {
            OptionFeedback::RevealedCorrect
        } else {
            OptionFeedback::Neutral
        }
    }

    /// Close out a completed quiz. Returns `None` if the result is not
    /// showing yet.
    pub fn finish(self) -> Option<QuizSummary> {
        if !self.is_complete() {
            return None;
        }

        Some(QuizSummary {
            target_name: self.target.name().to_string(),
            score: self.score,
            total: self.questions.len() as u32,
            percentage: self.percentage(),
            finished_at: Utc::now(),
        })
    }
}
