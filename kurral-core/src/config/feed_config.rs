use serde::{Deserialize, Serialize};

use super::defaults;
use super::{ensure_positive, ensure_unit};
use crate::errors::{KurralError, KurralResult};

/// Ranking engine configuration: signal weights and shape parameters.
///
/// These are the fixed constants of the scoring policy. The only knobs a
/// viewer controls are the ones exposed through
/// [`ForYouConfig`](super::ForYouConfig).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub relationship_weight: f64,
    pub topic_weight: f64,
    pub recency_weight: f64,
    pub value_weight: f64,
    pub conversation_weight: f64,
    /// Hours for the recency signal to halve.
    pub recency_half_life_hours: f64,
    /// Multiplicative down-weight applied to `needs_review` chirps.
    pub review_dampening: f64,
    /// Comment count at which the conversation-activity signal saturates.
    pub conversation_saturation: f64,
    /// Topic overlap count at which the affinity signal saturates.
    pub topic_overlap_saturation: usize,
    /// Value signal contribution for chirps with no value score yet.
    pub neutral_value: f64,
}

impl FeedConfig {
    pub fn validate(&self) -> KurralResult<()> {
        let weights = [
            ("feed.relationship_weight", self.relationship_weight),
            ("feed.topic_weight", self.topic_weight),
            ("feed.recency_weight", self.recency_weight),
            ("feed.value_weight", self.value_weight),
            ("feed.conversation_weight", self.conversation_weight),
        ];
        let mut sum = 0.0;
        for (name, w) in weights {
            ensure_unit(name, w)?;
            sum += w;
        }
        if sum <= 0.0 {
            return Err(KurralError::InvalidConfig {
                reason: "feed signal weights must not all be zero".to_string(),
            });
        }
        ensure_positive("feed.recency_half_life_hours", self.recency_half_life_hours)?;
        ensure_unit("feed.review_dampening", self.review_dampening)?;
        ensure_positive("feed.conversation_saturation", self.conversation_saturation)?;
        if self.topic_overlap_saturation == 0 {
            return Err(KurralError::InvalidConfig {
                reason: "feed.topic_overlap_saturation must be at least 1".to_string(),
            });
        }
        ensure_unit("feed.neutral_value", self.neutral_value)?;
        Ok(())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            relationship_weight: defaults::DEFAULT_RELATIONSHIP_WEIGHT,
            topic_weight: defaults::DEFAULT_TOPIC_WEIGHT,
            recency_weight: defaults::DEFAULT_RECENCY_WEIGHT,
            value_weight: defaults::DEFAULT_VALUE_WEIGHT,
            conversation_weight: defaults::DEFAULT_CONVERSATION_WEIGHT,
            recency_half_life_hours: defaults::DEFAULT_RECENCY_HALF_LIFE_HOURS,
            review_dampening: defaults::DEFAULT_REVIEW_DAMPENING,
            conversation_saturation: defaults::DEFAULT_CONVERSATION_SATURATION,
            topic_overlap_saturation: defaults::DEFAULT_TOPIC_OVERLAP_SATURATION,
            neutral_value: defaults::DEFAULT_NEUTRAL_VALUE,
        }
    }
}
