use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chirp::Chirp;

/// A chirp paired with its rank score and a one-line explanation of why
/// it was ranked there. Engine output, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChirp {
    pub chirp: Chirp,
    pub score: f64,
    pub explanation: String,
}

/// Ordered feed for one viewer. When empty, `diagnosis` says why.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankedFeed {
    pub chirps: Vec<ScoredChirp>,
    #[serde(default)]
    pub diagnosis: Option<FeedDiagnosis>,
}

impl RankedFeed {
    pub fn empty(diagnosis: FeedDiagnosis) -> Self {
        Self {
            chirps: Vec::new(),
            diagnosis: Some(diagnosis),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chirps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chirps.len()
    }
}

/// Why a feed came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedDiagnosis {
    /// No viewer was set.
    NotPersonalized,
    /// The viewer follows no one and has no interests to rank by.
    NoSignals,
    /// Muting excluded every candidate.
    OverMuted { muted_topics: usize },
}

impl fmt::Display for FeedDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPersonalized => write!(f, "not personalized"),
            Self::NoSignals => write!(f, "no follows or interests to rank by"),
            Self::OverMuted { muted_topics } => {
                write!(f, "all candidates muted ({muted_topics} muted topics)")
            }
        }
    }
}
