//! # kurral-tuning
//!
//! Watches a viewer's engagement history and proposes
//! [`ForYouConfig`](kurral_core::config::ForYouConfig) edits: more of
//! what they engage with, less of what they ignore or mute repeatedly.
//!
//! Suggestions are advisory. The generator never touches a config; the
//! viewer accepts or ignores each suggestion in the UI, and acceptance
//! is a pure merge the caller performs.

pub mod analysis;
pub mod engine;

pub use analysis::{analyze, EngagementAnalysis, TopicStats};
pub use engine::TuningEngine;
