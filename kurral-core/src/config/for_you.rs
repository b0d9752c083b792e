use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::KurralResult;

/// A viewer's personalization knobs for the "For You" feed.
///
/// Exactly these options are recognized — unknown keys are rejected at
/// deserialization so a stale client can't smuggle settings past the
/// ranking engine. Mutated only by the viewer (directly, or by accepting
/// a tuning suggestion).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForYouConfig {
    pub following_weight: FollowingWeight,
    pub boost_active_conversations: bool,
    pub liked_topics: BTreeSet<String>,
    pub muted_topics: BTreeSet<String>,
}

impl ForYouConfig {
    /// blake3 hash of the serialized config, used as the config component
    /// of the feed cache key.
    pub fn fingerprint(&self) -> KurralResult<String> {
        let serialized = serde_json::to_string(self)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }

    pub fn is_muted(&self, topic: &str) -> bool {
        self.muted_topics.contains(topic)
    }
}

/// How strongly followed authors are promoted in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowingWeight {
    None,
    Light,
    Medium,
    Heavy,
}

impl FollowingWeight {
    /// Relationship signal multiplier applied to followed authors.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Light => 0.25,
            Self::Medium => 0.5,
            Self::Heavy => 1.0,
        }
    }

    /// Next step up, saturating at Heavy.
    pub fn stepped_up(self) -> Self {
        match self {
            Self::None => Self::Light,
            Self::Light => Self::Medium,
            Self::Medium | Self::Heavy => Self::Heavy,
        }
    }

    /// Next step down, saturating at None.
    pub fn stepped_down(self) -> Self {
        match self {
            Self::Heavy => Self::Medium,
            Self::Medium => Self::Light,
            Self::Light | Self::None => Self::None,
        }
    }
}

impl Default for FollowingWeight {
    fn default() -> Self {
        Self::Medium
    }
}
