//! Atelier - gamified art history learning.
//!
//! Session state and screen models on top of the course [`catalog`] and
//! the [`insight`] commentary client:
//!
//! - [`Navigator`]: active tab, active era and the overlay slots
//! - [`QuizSession`]: three-question quiz with binding first answers
//! - [`StoryPage`]: story reader content for a biography event
//! - [`Screen`]: serializable view of everything on screen
//!
//! Overlays are independent slots, not a stack or a single state machine.
//! Several can be open at once and [`Navigator::visible_overlay`] resolves
//! which one is on top.
//!
//! # Example
//!
//! ```
//! use atelier::{Navigator, Screen, QuizTarget};
//! use catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let mut nav = Navigator::for_catalog(&catalog);
//!
//! let monet = catalog.find_painter("painter-monet").unwrap();
//! nav.open_painter_profile(monet);
//!
//! let reward = monet.representative_lessons()[0].reward.clone();
//! nav.open_quiz(QuizTarget::Reward(reward));
//!
//! let screen = Screen::render(&catalog, &nav);
//! assert_eq!(screen.overlays.len(), 2);
//! ```

pub mod error;
pub mod navigation;
pub mod quiz;
pub mod story;
pub mod view;

pub use error::{NavigationError, Result};
pub use navigation::{
    InsightStart, InsightTarget, InsightTicket, Navigator, OverlayInstance, OverlayKind, Tab,
};
pub use quiz::{OptionFeedback, QuizPhase, QuizQuestion, QuizSession, QuizSummary, QuizTarget};
pub use story::StoryPage;
pub use view::Screen;
