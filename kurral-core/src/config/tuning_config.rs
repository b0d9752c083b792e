use serde::{Deserialize, Serialize};

use super::defaults;
use super::ensure_unit;
use crate::errors::{KurralError, KurralResult};

/// Tuning suggestion generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Below this many engagement events, no suggestion is produced.
    pub min_events: usize,
    /// Positive-engagement weight a topic needs before it is proposed as
    /// a liked topic.
    pub like_topic_threshold: f64,
    /// Mute actions on a topic before it is proposed as muted.
    pub mute_repeat_threshold: u32,
    /// Ignore share (ignores / impressions) above which a topic is
    /// proposed as muted.
    pub ignore_ratio_threshold: f64,
    /// Minimum impressions before the ignore ratio is trusted.
    pub ignore_min_volume: u32,
    /// Followed-author engagement share above which the following weight
    /// is stepped up.
    pub follow_step_up_share: f64,
    /// Followed-author engagement share below which the following weight
    /// is stepped down.
    pub follow_step_down_share: f64,
    /// Comment share above which boosting active conversations is
    /// proposed.
    pub comment_share_threshold: f64,
    /// Event count at which suggestion confidence saturates.
    pub confidence_saturation_events: usize,
}

impl TuningConfig {
    pub fn validate(&self) -> KurralResult<()> {
        ensure_unit("tuning.ignore_ratio_threshold", self.ignore_ratio_threshold)?;
        ensure_unit("tuning.follow_step_up_share", self.follow_step_up_share)?;
        ensure_unit("tuning.follow_step_down_share", self.follow_step_down_share)?;
        ensure_unit("tuning.comment_share_threshold", self.comment_share_threshold)?;
        if self.follow_step_down_share >= self.follow_step_up_share {
            return Err(KurralError::InvalidConfig {
                reason: format!(
                    "tuning.follow_step_down_share ({}) must be below follow_step_up_share ({})",
                    self.follow_step_down_share, self.follow_step_up_share
                ),
            });
        }
        if self.like_topic_threshold <= 0.0 {
            return Err(KurralError::InvalidConfig {
                reason: "tuning.like_topic_threshold must be positive".to_string(),
            });
        }
        if self.confidence_saturation_events == 0 {
            return Err(KurralError::InvalidConfig {
                reason: "tuning.confidence_saturation_events must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            min_events: defaults::DEFAULT_MIN_EVENTS,
            like_topic_threshold: defaults::DEFAULT_LIKE_TOPIC_THRESHOLD,
            mute_repeat_threshold: defaults::DEFAULT_MUTE_REPEAT_THRESHOLD,
            ignore_ratio_threshold: defaults::DEFAULT_IGNORE_RATIO_THRESHOLD,
            ignore_min_volume: defaults::DEFAULT_IGNORE_MIN_VOLUME,
            follow_step_up_share: defaults::DEFAULT_FOLLOW_STEP_UP_SHARE,
            follow_step_down_share: defaults::DEFAULT_FOLLOW_STEP_DOWN_SHARE,
            comment_share_threshold: defaults::DEFAULT_COMMENT_SHARE_THRESHOLD,
            confidence_saturation_events: defaults::DEFAULT_CONFIDENCE_SATURATION_EVENTS,
        }
    }
}
