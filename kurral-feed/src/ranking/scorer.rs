//! Multi-signal chirp scorer (5 weighted signals × policy dampening).

use chrono::{DateTime, Utc};

use kurral_core::chirp::Chirp;
use kurral_core::config::{defaults, FeedConfig, ForYouConfig};
use kurral_core::user::User;

use crate::signals;

/// Weights for the 5 scoring signals.
#[derive(Debug, Clone)]
pub struct SignalWeights {
    pub relationship: f64,
    pub topic: f64,
    pub recency: f64,
    pub conversation: f64,
    pub value: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            relationship: defaults::DEFAULT_RELATIONSHIP_WEIGHT,
            topic: defaults::DEFAULT_TOPIC_WEIGHT,
            recency: defaults::DEFAULT_RECENCY_WEIGHT,
            conversation: defaults::DEFAULT_CONVERSATION_WEIGHT,
            value: defaults::DEFAULT_VALUE_WEIGHT,
        }
    }
}

impl From<&FeedConfig> for SignalWeights {
    fn from(config: &FeedConfig) -> Self {
        Self {
            relationship: config.relationship_weight,
            topic: config.topic_weight,
            recency: config.recency_weight,
            conversation: config.conversation_weight,
            value: config.value_weight,
        }
    }
}

/// Each signal individually, for explanation building and debugging.
#[derive(Debug, Clone)]
pub struct SignalBreakdown {
    pub relationship: f64,
    pub topic: f64,
    pub recency: f64,
    pub conversation: f64,
    pub value: f64,
    /// Multiplicative policy factor applied to the weighted sum.
    pub dampening: f64,
    /// Topics shared with the viewer, primary first.
    pub matched_topics: Vec<String>,
    /// Final score: weighted sum × dampening.
    pub total: f64,
}

/// Score one chirp for one viewer.
pub fn score(
    chirp: &Chirp,
    viewer: &User,
    config: &ForYouConfig,
    feed: &FeedConfig,
    weights: &SignalWeights,
    now: DateTime<Utc>,
) -> SignalBreakdown {
    let matched: Vec<String> = signals::topic::matching_topics(chirp, viewer, config)
        .into_iter()
        .map(str::to_string)
        .collect();

    let relationship = signals::relationship::calculate(&chirp.author_id, viewer, config);
    let topic = signals::topic::calculate(matched.len(), feed.topic_overlap_saturation);
    let recency = signals::recency::calculate(chirp, now, feed.recency_half_life_hours);
    let conversation = signals::conversation::calculate(chirp, config, feed.conversation_saturation);
    let value = signals::value::calculate(chirp, feed.neutral_value);
    let dampening = signals::dampening::factor(chirp.fact_check_status, feed.review_dampening);

    let weighted_sum = weights.relationship * relationship
        + weights.topic * topic
        + weights.recency * recency
        + weights.conversation * conversation
        + weights.value * value;

    SignalBreakdown {
        relationship,
        topic,
        recency,
        conversation,
        value,
        dampening,
        matched_topics: matched,
        total: weighted_sum * dampening,
    }
}

/// Order scored chirps: score descending, ties broken by creation time
/// descending, then by id for a total order.
pub fn sort_scored(scored: &mut [(Chirp, SignalBreakdown, String)]) {
    scored.sort_by(|a, b| {
        b.1.total
            .partial_cmp(&a.1.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.0.created_at.cmp(&a.0.created_at))
            .then_with(|| a.0.id.cmp(&b.0.id))
    });
}
