pub mod engagement;
pub mod events;
pub mod ranked_feed;
pub mod tuning_suggestion;

pub use engagement::{EngagementEvent, EngagementKind};
pub use events::{Contribution, Violation, ViolationSeverity};
pub use ranked_feed::{FeedDiagnosis, RankedFeed, ScoredChirp};
pub use tuning_suggestion::TuningSuggestion;
