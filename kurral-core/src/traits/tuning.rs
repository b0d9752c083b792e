use chrono::{DateTime, Utc};

use crate::config::ForYouConfig;
use crate::models::{EngagementEvent, TuningSuggestion};

/// Proposes config edits from engagement history. Advisory only.
pub trait ITuner {
    /// `None` when the history is too thin to support a suggestion.
    fn suggest(
        &self,
        history: &[EngagementEvent],
        current: &ForYouConfig,
        now: DateTime<Utc>,
    ) -> Option<TuningSuggestion>;
}
