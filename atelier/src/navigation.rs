//! Navigator - tab, era and overlay state.
//!
//! Overlays are independent slots rather than a stack: each may be open or
//! closed on its own and several can be open at once. Which one the user
//! sees is decided by a fixed z-order (see [`OverlayKind::Z_ORDER`]).
//!
//! Every open gets a fresh [`OverlayInstance`]. Insight results are tagged
//! with the instance that asked for them, so a reply that arrives after its
//! overlay was closed or reopened is dropped instead of landing on the wrong
//! content.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog::{BioEvent, Catalog, EraId, LessonReward, Painter};
use insight::{InsightClient, InsightPanel, StartOutcome};

use crate::error::{NavigationError, Result};
use crate::quiz::{QuizSession, QuizSummary, QuizTarget};
use crate::story::StoryPage;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Bottom navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Learn,
    Collection,
}

/// The overlays, in display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    EraPicker,
    Story,
    Quiz,
    PaintingDetail,
    PainterProfile,
}

impl OverlayKind {
    /// Topmost first.
    pub const Z_ORDER: [OverlayKind; 5] = [
        OverlayKind::EraPicker,
        OverlayKind::Story,
        OverlayKind::Quiz,
        OverlayKind::PaintingDetail,
        OverlayKind::PainterProfile,
    ];
}

/// Identity of one opening of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct OverlayInstance(u64);

impl OverlayInstance {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Overlays that carry an insight panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum InsightTarget {
    PainterProfile,
    PaintingDetail,
}

impl fmt::Display for InsightTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PainterProfile => write!(f, "painter profile"),
            Self::PaintingDetail => write!(f, "painting detail"),
        }
    }
}

/// Insight topic for a painter profile.
pub fn painter_topic(painter: &Painter) -> String {
    format!("{} - {}", painter.name, painter.desc)
}

/// Insight topic for a painting detail.
pub fn painting_topic(reward: &LessonReward) -> String {
    format!(
        "The masterpiece {} and its contribution to Art History",
        reward.name
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct PainterProfileOverlay {
    pub instance: OverlayInstance,
    pub painter: Painter,
    pub insight: InsightPanel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaintingDetailOverlay {
    pub instance: OverlayInstance,
    pub reward: LessonReward,
    pub insight: InsightPanel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizOverlay {
    pub instance: OverlayInstance,
    pub session: QuizSession,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoryOverlay {
    pub instance: OverlayInstance,
    pub event: BioEvent,
    pub page: StoryPage,
}

/// A pending insight request.
///
/// Fetch the text for [`InsightTicket::topic`] and hand both back to
/// [`Navigator::finish_insight`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightTicket {
    instance: OverlayInstance,
    target: InsightTarget,
    topic: String,
}

impl InsightTicket {
    pub fn instance(&self) -> OverlayInstance {
        self.instance
    }

    pub fn target(&self) -> InsightTarget {
        self.target
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// Result of asking for insight on an overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightStart {
    /// The panel already shows its final text
    Resolved,
    /// The panel is loading
    Pending(InsightTicket),
}

/// Navigation state for one user session.
#[derive(Debug, Clone)]
pub struct Navigator {
    active_tab: Tab,
    active_era: EraId,
    era_picker: bool,
    painter_profile: Option<PainterProfileOverlay>,
    painting_detail: Option<PaintingDetailOverlay>,
    quiz: Option<QuizOverlay>,
    story: Option<StoryOverlay>,
    next_instance: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(EraId::default())
    }
}

/// Two navigators are equal when everything they show is equal.
impl PartialEq for Navigator {
    fn eq(&self, other: &Self) -> bool {
        self.active_tab == other.active_tab
            && self.active_era == other.active_era
            && self.era_picker == other.era_picker
            && self.painter_profile == other.painter_profile
            && self.painting_detail == other.painting_detail
            && self.quiz == other.quiz
            && self.story == other.story
    }
}

impl Navigator {
    /// Start on the learn tab with no overlay open.
    pub fn new(era: EraId) -> Self {
        Self {
            active_tab: Tab::default(),
            active_era: era,
            era_picker: false,
            painter_profile: None,
            painting_detail: None,
            quiz: None,
            story: None,
            next_instance: 0,
        }
    }

    /// Start on the catalog's default era.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.default_era())
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn active_era(&self) -> EraId {
        self.active_era
    }

    pub fn is_era_picker_open(&self) -> bool {
        self.era_picker
    }

    pub fn painter_profile(&self) -> Option<&PainterProfileOverlay> {
        self.painter_profile.as_ref()
    }

    pub fn painting_detail(&self) -> Option<&PaintingDetailOverlay> {
        self.painting_detail.as_ref()
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref().map(|q| &q.session)
    }

    /// The running quiz, for answering and advancing.
    pub fn quiz_mut(&mut self) -> Option<&mut QuizSession> {
        self.quiz.as_mut().map(|q| &mut q.session)
    }

    pub fn story(&self) -> Option<&StoryOverlay> {
        self.story.as_ref()
    }

    pub fn set_tab(&mut self, tab: Tab) {
        debug!(?tab, "Switching tab");
        self.active_tab = tab;
    }

    pub fn open_era_picker(&mut self) {
        self.era_picker = true;
    }

    /// Switch era and close the picker.
    pub fn select_era(&mut self, era: EraId) {
        debug!(%era, "Selecting era");
        self.active_era = era;
        self.era_picker = false;
    }

    pub fn close_era_picker(&mut self) {
        self.era_picker = false;
    }

    /// Open (or replace) the painter profile.
    pub fn open_painter_profile(&mut self, painter: &Painter) -> OverlayInstance {
        let instance = self.next_instance();
        debug!(painter = %painter.id, instance = instance.get(), "Opening painter profile");

        self.painter_profile = Some(PainterProfileOverlay {
            instance,
            painter: painter.clone(),
            insight: InsightPanel::new(painter_topic(painter)),
        });
        instance
    }

    pub fn close_painter_profile(&mut self) {
        self.painter_profile = None;
    }

    /// Open (or replace) the painting detail. Anything beneath it stays open.
    pub fn open_painting_detail(&mut self, reward: &LessonReward) -> OverlayInstance {
        let instance = self.next_instance();
        debug!(painting = %reward.name, instance = instance.get(), "Opening painting detail");

        self.painting_detail = Some(PaintingDetailOverlay {
            instance,
            reward: reward.clone(),
            insight: InsightPanel::new(painting_topic(reward)),
        });
        instance
    }

    pub fn close_painting_detail(&mut self) {
        self.painting_detail = None;
    }

    /// Start a fresh quiz. Locked lessons are refused and return `None`.
    pub fn open_quiz(&mut self, target: QuizTarget) -> Option<OverlayInstance> {
        if !target.is_playable() {
            debug!(quiz_target = target.name(), "Refusing quiz for locked lesson");
            return None;
        }

        let instance = self.next_instance();
        debug!(quiz_target = target.name(), instance = instance.get(), "Opening quiz");

        self.quiz = Some(QuizOverlay {
            instance,
            session: QuizSession::new(target),
        });
        Some(instance)
    }

    /// Abandon the quiz, whatever its phase.
    pub fn close_quiz(&mut self) {
        self.quiz = None;
    }

    /// Close a quiz that is showing its result and return the summary.
    /// A quiz still being answered stays open.
    pub fn finish_quiz(&mut self) -> Option<QuizSummary> {
        if !self.quiz.as_ref().is_some_and(|q| q.session.is_complete()) {
            return None;
        }

        let summary = self.quiz.take()?.session.finish()?;
        debug!(
            quiz_target = %summary.target_name,
            score = summary.score,
            percentage = summary.percentage,
            "Quiz finished"
        );
        Some(summary)
    }

    pub fn open_story(&mut self, event: &BioEvent) -> OverlayInstance {
        let instance = self.next_instance();
        debug!(title = %event.title, instance = instance.get(), "Opening story");

        self.story = Some(StoryOverlay {
            instance,
            event: event.clone(),
            page: StoryPage::for_event(event),
        });
        instance
    }

    pub fn close_story(&mut self) {
        self.story = None;
    }

    /// The topmost open overlay.
    pub fn visible_overlay(&self) -> Option<OverlayKind> {
        OverlayKind::Z_ORDER
            .into_iter()
            .find(|kind| self.is_kind_open(*kind))
    }

    /// Close the topmost overlay, returning which one was closed.
    pub fn back(&mut self) -> Option<OverlayKind> {
        let kind = self.visible_overlay()?;
        match kind {
            OverlayKind::EraPicker => self.close_era_picker(),
            OverlayKind::Story => self.close_story(),
            OverlayKind::Quiz => self.close_quiz(),
            OverlayKind::PaintingDetail => self.close_painting_detail(),
            OverlayKind::PainterProfile => self.close_painter_profile(),
        }
        Some(kind)
    }

    /// Whether the overlay opened as `instance` is still open.
    pub fn is_open(&self, instance: OverlayInstance) -> bool {
        self.painter_profile.as_ref().map(|o| o.instance) == Some(instance)
            || self.painting_detail.as_ref().map(|o| o.instance) == Some(instance)
            || self.quiz.as_ref().map(|o| o.instance) == Some(instance)
            || self.story.as_ref().map(|o| o.instance) == Some(instance)
    }

    pub fn insight_panel(&self, target: InsightTarget) -> Option<&InsightPanel> {
        match target {
            InsightTarget::PainterProfile => self.painter_profile.as_ref().map(|o| &o.insight),
            InsightTarget::PaintingDetail => self.painting_detail.as_ref().map(|o| &o.insight),
        }
    }

    /// Ask for insight on an open overlay.
    ///
    /// An unconfigured client resolves the panel immediately. Otherwise the
    /// panel starts loading and the returned ticket names the topic to fetch.
    pub fn start_insight(
        &mut self,
        target: InsightTarget,
        client: &InsightClient,
    ) -> Result<InsightStart> {
        let (instance, panel) = self
            .panel_mut(target)
            .ok_or(NavigationError::OverlayNotOpen(target))?;

        match client.start(panel)? {
            StartOutcome::Resolved => Ok(InsightStart::Resolved),
            StartOutcome::Pending => Ok(InsightStart::Pending(InsightTicket {
                instance,
                target,
                topic: panel.topic().to_string(),
            })),
        }
    }

    /// Deliver fetched text. Returns false, changing nothing, when the
    /// overlay that asked has since been closed or reopened.
    pub fn finish_insight(&mut self, ticket: &InsightTicket, text: impl Into<String>) -> bool {
        match self.panel_mut(ticket.target) {
            Some((instance, panel)) if instance == ticket.instance => panel.resolve(text),
            _ => {
                debug!(
                    overlay = %ticket.target,
                    instance = ticket.instance.get(),
                    "Dropping insight for closed overlay"
                );
                false
            }
        }
    }

    fn panel_mut(&mut self, target: InsightTarget) -> Option<(OverlayInstance, &mut InsightPanel)> {
        match target {
            InsightTarget::PainterProfile => self
                .painter_profile
                .as_mut()
                .map(|o| (o.instance, &mut o.insight)),
            InsightTarget::PaintingDetail => self
                .painting_detail
                .as_mut()
                .map(|o| (o.instance, &mut o.insight)),
        }
    }

    fn is_kind_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::EraPicker => self.era_picker,
            OverlayKind::Story => self.story.is_some(),
            OverlayKind::Quiz => self.quiz.is_some(),
            OverlayKind::PaintingDetail => self.painting_detail.is_some(),
            OverlayKind::PainterProfile => self.painter_profile.is_some(),
        }
    }

    fn next_instance(&mut self) -> OverlayInstance {
        self.next_instance += 1;
        OverlayInstance(self.next_instance)
    }
}
