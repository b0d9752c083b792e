//! One-line feed explanations from the dominant contributing signals.

use crate::ranking::scorer::{SignalBreakdown, SignalWeights};

/// A signal's weighted contribution must reach this share of the
/// dominant contribution to appear in the explanation.
const CONTRIBUTION_SHARE: f64 = 0.25;

/// Build the human-readable justification for a chirp's rank.
///
/// Signals are considered in fixed order (relationship, topic,
/// conversation, value, recency) so identical inputs always produce the
/// identical string. Every signal whose weighted contribution is within
/// [`CONTRIBUTION_SHARE`] of the dominant one is mentioned.
pub fn build_explanation(breakdown: &SignalBreakdown, weights: &SignalWeights) -> String {
    let mut candidates: Vec<(f64, String)> = Vec::new();

    let relationship = weights.relationship * breakdown.relationship;
    if relationship > 0.0 {
        candidates.push((relationship, "From someone you follow".to_string()));
    }

    let topic = weights.topic * breakdown.topic;
    if topic > 0.0 {
        if let Some(first) = breakdown.matched_topics.first() {
            candidates.push((topic, format!("Matches your interest in {first}")));
        }
    }

    let conversation = weights.conversation * breakdown.conversation;
    if conversation > 0.0 {
        candidates.push((conversation, "Active discussion".to_string()));
    }

    let value = weights.value * breakdown.value;
    if breakdown.value >= kurral_core::score::UnitScore::HIGH {
        candidates.push((value, "High-value chirp".to_string()));
    }

    let dominant = candidates
        .iter()
        .map(|(c, _)| *c)
        .fold(0.0_f64, f64::max);

    if dominant == 0.0 {
        // Nothing personal stood out; recency carried the score.
        return "Recently chirped".to_string();
    }

    let parts: Vec<String> = candidates
        .into_iter()
        .filter(|(c, _)| *c >= dominant * CONTRIBUTION_SHARE)
        .map(|(_, label)| label)
        .collect();

    parts.join(" · ")
}
