use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One viewer interaction with one chirp.
///
/// The caller denormalizes `topic` and `author_followed` onto the event
/// at ingestion so the tuning generator stays pure over its snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementEvent {
    pub chirp_id: String,
    pub viewer_id: String,
    pub kind: EngagementKind,
    /// Primary topic of the chirp at interaction time.
    pub topic: String,
    /// Whether the viewer followed the chirp's author at interaction time.
    pub author_followed: bool,
    pub at: DateTime<Utc>,
}

/// What the viewer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementKind {
    View,
    Like,
    Comment,
    Rechirp,
    /// Scrolled past without interacting.
    Ignore,
    Mute,
}

impl EngagementKind {
    /// Whether this interaction expresses interest (as opposed to
    /// passing over or rejecting the content).
    pub fn is_positive(self) -> bool {
        matches!(self, Self::View | Self::Like | Self::Comment | Self::Rechirp)
    }
}
