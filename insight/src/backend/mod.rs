//! Text generation backend abstraction layer.
//!
//! - Gemini (Google Generative Language API)
//! - Mock backend for testing

pub mod gemini;
pub mod mock;
pub mod traits;

pub use gemini::GeminiBackend;
pub use mock::{MockBackend, MockFailure};
pub use traits::{BackendError, GenerationRequest, GenerationResponse, TextBackend};
