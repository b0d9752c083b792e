//! Engagement history folding: per-topic and global statistics.

use std::collections::BTreeMap;

use kurral_core::models::{EngagementEvent, EngagementKind};

/// Accumulated interaction statistics for one topic.
#[derive(Debug, Clone, Default)]
pub struct TopicStats {
    /// Sum of positive interaction weights (likes, comments, rechirps,
    /// views).
    pub positive_weight: f64,
    /// Times the viewer scrolled past without interacting.
    pub ignores: u32,
    /// Times the viewer muted content on this topic.
    pub mutes: u32,
    /// Positive interactions + ignores: how often the topic was shown.
    pub impressions: u32,
}

impl TopicStats {
    /// Share of impressions the viewer passed over. Zero until there are
    /// impressions to judge by.
    pub fn ignore_ratio(&self) -> f64 {
        if self.impressions == 0 {
            return 0.0;
        }
        self.ignores as f64 / self.impressions as f64
    }
}

/// Folded view of an engagement history.
#[derive(Debug, Clone, Default)]
pub struct EngagementAnalysis {
    /// Topic name → stats, in deterministic order.
    pub topics: BTreeMap<String, TopicStats>,
    pub total_events: usize,
    pub positive_events: usize,
    /// Positive interactions on chirps from followed authors.
    pub followed_positive: usize,
    pub comments: usize,
}

impl EngagementAnalysis {
    /// How much of the viewer's positive engagement lands on followed
    /// authors.
    pub fn followed_share(&self) -> f64 {
        if self.positive_events == 0 {
            return 0.0;
        }
        self.followed_positive as f64 / self.positive_events as f64
    }

    /// How much of the viewer's positive engagement is commenting.
    pub fn comment_share(&self) -> f64 {
        if self.positive_events == 0 {
            return 0.0;
        }
        self.comments as f64 / self.positive_events as f64
    }
}

/// Interaction strength per kind. Comments weigh more than drive-by
/// views; ignores and mutes carry no positive weight.
fn kind_weight(kind: EngagementKind) -> f64 {
    match kind {
        EngagementKind::View => 0.25,
        EngagementKind::Like => 1.0,
        EngagementKind::Comment => 1.5,
        EngagementKind::Rechirp => 1.25,
        EngagementKind::Ignore | EngagementKind::Mute => 0.0,
    }
}

/// Fold an engagement history into per-topic and global statistics.
pub fn analyze(history: &[EngagementEvent]) -> EngagementAnalysis {
    let mut analysis = EngagementAnalysis {
        total_events: history.len(),
        ..Default::default()
    };

    for event in history {
        let stats = analysis.topics.entry(event.topic.clone()).or_default();
        match event.kind {
            EngagementKind::Mute => stats.mutes += 1,
            EngagementKind::Ignore => {
                stats.ignores += 1;
                stats.impressions += 1;
            }
            kind => {
                stats.positive_weight += kind_weight(kind);
                stats.impressions += 1;
                analysis.positive_events += 1;
                if event.author_followed {
                    analysis.followed_positive += 1;
                }
                if kind == EngagementKind::Comment {
                    analysis.comments += 1;
                }
            }
        }
    }

    analysis
}
