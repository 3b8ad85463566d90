//! View models.
//!
//! Plain serializable snapshots derived from the catalog and the navigator.
//! A renderer draws them as-is; nothing here holds state.

pub mod collection;
pub mod learn;
pub mod overlays;

use serde::Serialize;

use catalog::{Catalog, EraId};

use crate::navigation::{Navigator, OverlayKind, Tab};
use crate::story::StoryPage;

pub use collection::{CardView, CollectionView, DeckView};
pub use learn::{LearnView, PainterCardView, PathNodeView, RegionSectionView, SchoolSectionView};
pub use overlays::{
    BioEntryView, EraOptionView, EraPickerView, PainterProfileView, PaintingDetailView,
    QuizOptionView, QuizView, WorkTileView,
};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Era badge in the top bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct HeaderView {
    pub era: EraId,
    pub name: String,
    pub range: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "tab", content = "view", rename_all = "lowercase")]
pub enum TabContent {
    Learn(LearnView),
    Collection(CollectionView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "kind", content = "view", rename_all = "snake_case")]
pub enum OverlayView {
    EraPicker(EraPickerView),
    Story(StoryPage),
    Quiz(QuizView),
    PaintingDetail(PaintingDetailView),
    PainterProfile(PainterProfileView),
}

impl OverlayView {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Self::EraPicker(_) => OverlayKind::EraPicker,
            Self::Story(_) => OverlayKind::Story,
            Self::Quiz(_) => OverlayKind::Quiz,
            Self::PaintingDetail(_) => OverlayKind::PaintingDetail,
            Self::PainterProfile(_) => OverlayKind::PainterProfile,
        }
    }
}

/// Everything on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Screen {
    /// `None` if the active era is missing from the catalog
    pub header: Option<HeaderView>,
    pub content: TabContent,
    /// Open overlays, bottom to top
    pub overlays: Vec<OverlayView>,
}

impl Screen {
    pub fn render(catalog: &Catalog, nav: &Navigator) -> Self {
        let era = nav.active_era();

        let header = catalog.get_era(era).map(|e| HeaderView {
            era,
            name: e.name.clone(),
            range: e.range.clone(),
            color: e.color.clone(),
        });

        let content = match nav.active_tab() {
            Tab::Learn => TabContent::Learn(LearnView::build(catalog, era)),
            Tab::Collection => TabContent::Collection(CollectionView::build(catalog, era)),
        };

        let overlays = OverlayKind::Z_ORDER
            .iter()
            .rev()
            .filter_map(|kind| Self::overlay(catalog, nav, *kind))
            .collect();

        Self {
            header,
            content,
            overlays,
        }
    }

    /// The overlay the user is looking at.
    pub fn top_overlay(&self) -> Option<&OverlayView> {
        self.overlays.last()
    }

    fn overlay(catalog: &Catalog, nav: &Navigator, kind: OverlayKind) -> Option<OverlayView> {
        match kind {
            OverlayKind::EraPicker => nav
                .is_era_picker_open()
                .then(|| OverlayView::EraPicker(EraPickerView::build(catalog, nav.active_era()))),
            OverlayKind::Story => nav.story().map(|s| OverlayView::Story(s.page.clone())),
            OverlayKind::Quiz => nav.quiz().map(|q| OverlayView::Quiz(QuizView::build(q))),
            OverlayKind::PaintingDetail => nav.painting_detail().map(|o| {
                OverlayView::PaintingDetail(PaintingDetailView::build(&o.reward, &o.insight))
            }),
            OverlayKind::PainterProfile => nav.painter_profile().map(|o| {
                OverlayView::PainterProfile(PainterProfileView::build(&o.painter, &o.insight))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let catalog = Catalog::builtin();
        let nav = Navigator::for_catalog(&catalog);
        let screen = Screen::render(&catalog, &nav);

        assert_eq!(screen.header.as_ref().map(|h| h.era), Some(EraId::NineteenthCentury));
        assert!(matches!(screen.content, TabContent::Learn(ref v) if !v.is_empty()));
        assert!(screen.overlays.is_empty());
    }

    #[test]
    fn test_overlays_stack_in_z_order() {
        let catalog = Catalog::builtin();
        let monet = catalog.find_painter("painter-monet").unwrap();
        let mut nav = Navigator::for_catalog(&catalog);

        nav.open_painting_detail(&monet.representative_lessons()[0].reward);
        nav.open_painter_profile(monet);

        let screen = Screen::render(&catalog, &nav);
        let kinds: Vec<OverlayKind> = screen.overlays.iter().map(|o| o.kind()).collect();
        assert_eq!(
            kinds,
            vec![OverlayKind::PainterProfile, OverlayKind::PaintingDetail]
        );
        assert_eq!(
            screen.top_overlay().map(|o| o.kind()),
            nav.visible_overlay()
        );
    }

    #[test]
    fn test_collection_tab() {
        let catalog = Catalog::builtin();
        let mut nav = Navigator::for_catalog(&catalog);
        nav.set_tab(Tab::Collection);

        let screen = Screen::render(&catalog, &nav);
        assert!(matches!(screen.content, TabContent::Collection(ref v) if v.decks.len() == 2));
    }
}
