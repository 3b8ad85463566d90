//! Story reader content for biographical events.

use serde::{Deserialize, Serialize};

use catalog::BioEvent;

#[cfg(feature = "typescript")]
use ts_rs::TS;

const STORY_BODY: [&str; 4] = [
    "在这幅作品诞生之前，学院派艺术占据着统治地位。然而，这位艺术家试图打破常规。",
    "当时巴黎的艺术氛围充满了变革。年轻的画家们渴望走出画室，去描绘瞬息万变的自然光色。",
    "他没有像往常那样先画素描稿，而是直接用色彩在画布上涂抹。笔触飞快，仿佛在与光线赛跑。",
    "这幅作品最初展出时，遭受了猛烈抨击。但正是这种对瞬间真实感受的捕捉，开启了现代艺术的大门。",
];

/// A full-screen story page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct StoryPage {
    pub title: String,
    pub year: String,
    pub image: String,
    pub caption: Option<String>,
    pub paragraphs: Vec<String>,
}

impl StoryPage {
    /// Page for a biographical event. The body is a fixed narrative
    /// opened by the event title.
    pub fn for_event(event: &BioEvent) -> Self {
        let mut paragraphs = Vec::with_capacity(STORY_BODY.len() + 1);
        paragraphs.push(format!("{} 是艺术史上的一个重要时刻。", event.title));
        paragraphs.extend(STORY_BODY.iter().map(|p| p.to_string()));

        Self {
            title: event.title.clone(),
            year: event.year.clone(),
            image: event.image.clone(),
            caption: event.image_caption.clone(),
            paragraphs,
        }
    }
}
