pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod highlight;
pub mod input;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod random;
pub mod timer;
pub mod ui;
pub mod utils;
pub mod wheel;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use app::App;
pub use config::{AppConfig, QuizTimings, WheelConfig};
pub use content::PoemContent;
pub use error::ContentError;
pub use highlight::{Fragment, Highlighter};
pub use input::handle_key;
pub use models::{Overlay, Question, Tab};
pub use quiz::{OptionStatus, QuizEngine, QuizEvent};
pub use random::{RandomSource, RngSource};
pub use timer::Scheduler;
pub use wheel::{SelectionWheel, SpinAnimation, WheelSegment, SPIN_ANIMATION};
