use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ForYouConfig;
use crate::score::UnitScore;

/// A proposed edit to a viewer's [`ForYouConfig`], derived from
/// engagement history.
///
/// Advisory only: nothing applies a suggestion automatically. The caller
/// shows it to the viewer, and on accept merges it with
/// [`TuningSuggestion::merge_into`] — a pure function, so the operation
/// is reversible by keeping the previous config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningSuggestion {
    pub id: String,
    pub proposed: ForYouConfig,
    pub confidence: UnitScore,
    pub explanation: String,
    /// Number of engagement events the suggestion was derived from.
    pub based_on_events: usize,
    pub created_at: DateTime<Utc>,
}

impl TuningSuggestion {
    /// Merge the proposal into `current`, which may have changed since
    /// the suggestion was generated: proposed scalars win, topic sets
    /// union with the viewer's current ones, and topics the proposal
    /// mutes are removed from liked.
    pub fn merge_into(&self, current: &ForYouConfig) -> ForYouConfig {
        let mut merged = ForYouConfig {
            following_weight: self.proposed.following_weight,
            boost_active_conversations: self.proposed.boost_active_conversations,
            liked_topics: current
                .liked_topics
                .union(&self.proposed.liked_topics)
                .cloned()
                .collect(),
            muted_topics: current
                .muted_topics
                .union(&self.proposed.muted_topics)
                .cloned()
                .collect(),
        };
        merged.liked_topics = &merged.liked_topics - &merged.muted_topics;
        merged
    }
}
