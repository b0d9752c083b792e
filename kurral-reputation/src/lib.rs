//! # kurral-reputation
//!
//! Maintains one [`KurralScore`](kurral_core::user::KurralScore) per
//! author: a 0–100 trust score over five decayed component aggregates.
//!
//! Components are exponential running aggregates with multi-day
//! half-lives rather than lifetime averages, so old behavior loses
//! influence over time and authors recover from past violations through
//! sustained quality activity. Reads project decay to the read instant
//! without mutating stored state; same-author writes are serialized by
//! the store's entry lock.

pub mod decay;
pub mod engine;

pub use engine::ReputationEngine;
