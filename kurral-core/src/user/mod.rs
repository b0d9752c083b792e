pub mod trust;

pub use trust::{KurralScore, SnapshotTrigger, TrustComponents, TrustSnapshot};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::ForYouConfig;

/// A Kurral account: viewer-side personalization plus author-side trust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Author ids this user follows.
    pub following: BTreeSet<String>,
    /// Topics this user has declared interest in.
    pub interests: BTreeSet<String>,
    /// Viewer-owned ranking configuration. Mutated only by the viewer,
    /// directly or by accepting a tuning suggestion.
    pub for_you_config: ForYouConfig,
    /// Author-owned reputation record. Mutated only by the reputation
    /// engine.
    pub kurral_score: KurralScore,
}

impl User {
    /// Default-filling constructor: no follows, no interests, default
    /// config, baseline trust score.
    pub fn new(id: impl Into<String>, created_at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            id: id.into(),
            following: BTreeSet::new(),
            interests: BTreeSet::new(),
            for_you_config: ForYouConfig::default(),
            kurral_score: KurralScore::baseline(created_at),
        }
    }

    pub fn follows(&self, author_id: &str) -> bool {
        self.following.contains(author_id)
    }
}
