use chrono::{DateTime, Utc};
use tracing::info;

use kurral_core::config::{ForYouConfig, TuningConfig};
use kurral_core::models::{EngagementEvent, TuningSuggestion};
use kurral_core::score::UnitScore;
use kurral_core::traits::ITuner;

use crate::analysis;

/// The tuning suggestion generator.
///
/// Observes engagement and proposes config deltas; a human applies or
/// ignores them. Produces nothing when the history is too thin or when
/// it would propose no actual change.
pub struct TuningEngine {
    config: TuningConfig,
}

impl TuningEngine {
    pub fn new() -> Self {
        Self::with_config(TuningConfig::default())
    }

    pub fn with_config(config: TuningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TuningConfig {
        &self.config
    }

    /// Derive a suggestion from the viewer's engagement history.
    pub fn suggest(
        &self,
        history: &[EngagementEvent],
        current: &ForYouConfig,
        now: DateTime<Utc>,
    ) -> Option<TuningSuggestion> {
        if history.len() < self.config.min_events {
            return None;
        }

        let analysis = analysis::analyze(history);
        let mut proposed = current.clone();
        let mut drivers: Vec<String> = Vec::new();

        // Topics the viewer keeps rejecting go first: a mute beats a
        // like when both trigger for the same topic.
        for (topic, stats) in &analysis.topics {
            let repeat_muted = stats.mutes >= self.config.mute_repeat_threshold;
            let ignored = stats.impressions >= self.config.ignore_min_volume
                && stats.ignore_ratio() >= self.config.ignore_ratio_threshold;
            if (repeat_muted || ignored) && !proposed.muted_topics.contains(topic) {
                proposed.muted_topics.insert(topic.clone());
                proposed.liked_topics.remove(topic);
                if repeat_muted {
                    drivers.push(format!("you muted {topic} repeatedly"));
                } else {
                    drivers.push(format!("you usually scroll past {topic}"));
                }
            }
        }

        for (topic, stats) in &analysis.topics {
            if stats.positive_weight >= self.config.like_topic_threshold
                && !proposed.liked_topics.contains(topic)
                && !proposed.muted_topics.contains(topic)
            {
                proposed.liked_topics.insert(topic.clone());
                drivers.push(format!("you often engage with {topic} chirps"));
            }
        }

        let followed_share = analysis.followed_share();
        if followed_share >= self.config.follow_step_up_share {
            let stepped = current.following_weight.stepped_up();
            if stepped != current.following_weight {
                proposed.following_weight = stepped;
                drivers.push("most of your engagement is with people you follow".to_string());
            }
        } else if analysis.positive_events > 0
            && followed_share <= self.config.follow_step_down_share
        {
            let stepped = current.following_weight.stepped_down();
            if stepped != current.following_weight {
                proposed.following_weight = stepped;
                drivers.push("you mostly engage outside the people you follow".to_string());
            }
        }

        if !current.boost_active_conversations
            && analysis.comment_share() >= self.config.comment_share_threshold
        {
            proposed.boost_active_conversations = true;
            drivers.push("you join conversations often".to_string());
        }

        if proposed == *current {
            return None;
        }

        let confidence = UnitScore::new(
            analysis.total_events as f64 / self.config.confidence_saturation_events as f64,
        );
        let explanation = format!(
            "Based on {} recent interactions: {}",
            analysis.total_events,
            drivers.join("; ")
        );

        info!(
            events = analysis.total_events,
            drivers = drivers.len(),
            %confidence,
            "tuning suggestion generated"
        );

        Some(TuningSuggestion {
            id: uuid::Uuid::new_v4().to_string(),
            proposed,
            confidence,
            explanation,
            based_on_events: analysis.total_events,
            created_at: now,
        })
    }
}

impl Default for TuningEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ITuner for TuningEngine {
    fn suggest(
        &self,
        history: &[EngagementEvent],
        current: &ForYouConfig,
        now: DateTime<Utc>,
    ) -> Option<TuningSuggestion> {
        TuningEngine::suggest(self, history, current, now)
    }
}
