//! # kurral-policy
//!
//! Reduces a chirp's claims and fact-check verdicts into one of three
//! visibility states: `clean`, `needs_review`, or `blocked`.
//!
//! The reduction is fail-closed: the post-level status is the *worst*
//! class across all claims, so ambiguity in any sensitive claim is never
//! masked by unrelated verified claims. The engine is pure, total, and
//! stateless — each recomputation is independent given current evidence.

pub mod classify;
pub mod engine;

pub use engine::{ClaimDecision, PolicyBreakdown, PolicyEngine};
