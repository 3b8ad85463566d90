//! Navigation behavior across the catalog and view models.

use atelier::view::TabContent;
use atelier::{Navigator, OverlayKind, QuizTarget, Screen, Tab};
use catalog::{Catalog, EraId, Painter};

fn monet(catalog: &Catalog) -> &Painter {
    catalog.find_painter("painter-monet").unwrap()
}

#[test]
fn test_unknown_era_has_no_regions() {
    let catalog = Catalog::builtin();
    assert!(catalog.regions_for("baroque").is_empty());
    assert!(catalog.regions_for("").is_empty());
    assert_eq!(catalog.regions_for("19th_century").len(), 1);
}

#[test]
fn test_closing_detail_keeps_profile() {
    let catalog = Catalog::builtin();
    let painter = monet(&catalog);
    let mut nav = Navigator::for_catalog(&catalog);

    let profile = nav.open_painter_profile(painter);
    nav.open_painting_detail(&painter.representative_lessons()[1].reward);
    nav.close_painting_detail();

    assert_eq!(nav.visible_overlay(), Some(OverlayKind::PainterProfile));
    assert!(nav.is_open(profile));
    assert_eq!(nav.painter_profile().unwrap().painter.id, "painter-monet");
}

#[test]
fn test_story_round_trip_restores_state() {
    let catalog = Catalog::builtin();
    let painter = monet(&catalog);
    let mut nav = Navigator::for_catalog(&catalog);
    nav.open_painter_profile(painter);

    let before = nav.clone();
    let before_screen = Screen::render(&catalog, &nav);

    nav.open_story(&painter.bio_events[1]);
    assert_eq!(nav.visible_overlay(), Some(OverlayKind::Story));
    assert!(nav.story().unwrap().page.paragraphs[0].starts_with("《印象·日出》与印象派"));

    nav.close_story();
    assert_eq!(nav, before);
    assert_eq!(Screen::render(&catalog, &nav), before_screen);
}

#[test]
fn test_empty_era_renders_empty_views() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::for_catalog(&catalog);

    nav.open_era_picker();
    nav.select_era(EraId::Modern);

    let screen = Screen::render(&catalog, &nav);
    assert!(screen.overlays.is_empty());
    assert!(matches!(screen.content, TabContent::Learn(ref v) if v.is_empty()));

    nav.set_tab(Tab::Collection);
    let screen = Screen::render(&catalog, &nav);
    assert!(matches!(screen.content, TabContent::Collection(ref v) if v.is_empty()));
}

#[test]
fn test_era_survives_tab_switch() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::for_catalog(&catalog);

    nav.select_era(EraId::Renaissance);
    nav.set_tab(Tab::Collection);
    nav.set_tab(Tab::Learn);

    assert_eq!(nav.active_era(), EraId::Renaissance);
}

#[test]
fn test_quiz_from_detail_sits_above_it() {
    let catalog = Catalog::builtin();
    let painter = monet(&catalog);
    let reward = painter.representative_lessons()[0].reward.clone();
    let mut nav = Navigator::for_catalog(&catalog);

    nav.open_painter_profile(painter);
    nav.open_painting_detail(&reward);
    nav.open_quiz(QuizTarget::Reward(reward));

    assert_eq!(nav.back(), Some(OverlayKind::Quiz));
    assert_eq!(nav.visible_overlay(), Some(OverlayKind::PaintingDetail));
}

#[test]
fn test_quiz_from_active_lesson() {
    let catalog = Catalog::builtin();
    let lesson = catalog.find_lesson(105).cloned().unwrap();
    let mut nav = Navigator::for_catalog(&catalog);

    assert!(nav.open_quiz(QuizTarget::Lesson(lesson)).is_some());
    let question = nav.quiz().unwrap().current_question().unwrap();
    assert!(question.text.contains("圣拉扎尔火车站"));
}

#[test]
fn test_screen_serializes() {
    let catalog = Catalog::builtin();
    let mut nav = Navigator::for_catalog(&catalog);
    nav.open_painter_profile(monet(&catalog));

    let json = serde_json::to_value(Screen::render(&catalog, &nav)).unwrap();
    assert_eq!(json["content"]["tab"], "learn");
    assert_eq!(json["overlays"][0]["kind"], "painter_profile");
    assert_eq!(json["overlays"][0]["view"]["insight"]["phase"]["phase"], "idle");
}
