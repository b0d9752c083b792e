//! # kurral-feed
//!
//! The "For You" ranking engine. Orders candidate chirps for one viewer
//! by a weighted sum of per-chirp signals — author relationship, topic
//! affinity, recency, conversation activity, and content value — with
//! policy status applied as a hard filter (`blocked`) or a multiplicative
//! down-weight (`needs_review`). Every ranked chirp carries a one-line
//! explanation of the dominant signals.
//!
//! Pure given its inputs: identical snapshots yield identical ordering
//! and identical explanation strings. The engine holds no per-viewer
//! state, so it can be invoked concurrently per viewer without locking.

pub mod cache;
pub mod engine;
pub mod ranking;
pub mod signals;
pub mod why;

pub use cache::{FeedCache, FeedCacheKey};
pub use engine::{FeedEngine, RankContext};
pub use ranking::scorer::{SignalBreakdown, SignalWeights};
