use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TrustWeights;
use crate::constants::{MAX_TRUST_HISTORY_SNAPSHOTS, TRUST_SCORE_MAX};
use crate::score::UnitScore;

/// An author's long-lived trust record: a 0–100 score derived from five
/// decayed component aggregates, plus a bounded history of snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KurralScore {
    /// Always the weighted sum of `components` scaled to [0, 100] —
    /// recompute via [`KurralScore::recompute`] after any component change.
    pub score: f64,
    pub last_updated: DateTime<Utc>,
    pub components: TrustComponents,
    /// Append-only snapshot history, rotated at
    /// [`MAX_TRUST_HISTORY_SNAPSHOTS`].
    pub history: Vec<TrustSnapshot>,
}

impl KurralScore {
    /// Baseline record for a new author.
    pub fn baseline(at: DateTime<Utc>) -> Self {
        let components = TrustComponents::baseline();
        let score = components.weighted_score(&TrustWeights::default());
        Self {
            score,
            last_updated: at,
            components,
            history: Vec::new(),
        }
    }

    /// Recompute `score` from the components. The score is always this
    /// deterministic function of the five components, clamped to [0, 100].
    pub fn recompute(&mut self, weights: &TrustWeights) {
        self.score = self.components.weighted_score(weights);
    }

    /// Append a snapshot of the current state, rotating out the oldest
    /// entries beyond the retention cap.
    pub fn push_snapshot(&mut self, at: DateTime<Utc>, trigger: SnapshotTrigger) {
        self.history.push(TrustSnapshot {
            at,
            score: self.score,
            components: self.components,
            trigger,
        });
        if self.history.len() > MAX_TRUST_HISTORY_SNAPSHOTS {
            let excess = self.history.len() - MAX_TRUST_HISTORY_SNAPSHOTS;
            self.history.drain(..excess);
        }
    }
}

/// The five decayed component aggregates behind a trust score.
///
/// Each is a [`UnitScore`]. `violation_history` is stored as a
/// *cleanliness* value — 1.0 means a clean record — so every component
/// contributes positively and recovery from a violation is a monotonic
/// climb back toward 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustComponents {
    pub quality_history: UnitScore,
    pub violation_history: UnitScore,
    pub engagement_quality: UnitScore,
    pub consistency: UnitScore,
    pub community_trust: UnitScore,
}

impl TrustComponents {
    /// Starting point for a new author: neutral everywhere, clean
    /// violation record.
    pub fn baseline() -> Self {
        Self {
            quality_history: UnitScore::new(UnitScore::NEUTRAL),
            violation_history: UnitScore::new(1.0),
            engagement_quality: UnitScore::new(UnitScore::NEUTRAL),
            consistency: UnitScore::new(UnitScore::NEUTRAL),
            community_trust: UnitScore::new(UnitScore::NEUTRAL),
        }
    }

    /// Fixed-weight sum scaled to [0, 100] and clamped.
    pub fn weighted_score(&self, weights: &TrustWeights) -> f64 {
        let raw = weights.quality * self.quality_history.value()
            + weights.violation * self.violation_history.value()
            + weights.engagement * self.engagement_quality.value()
            + weights.consistency * self.consistency.value()
            + weights.community * self.community_trust.value();
        (raw * TRUST_SCORE_MAX).clamp(0.0, TRUST_SCORE_MAX)
    }
}

/// What caused a snapshot to be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotTrigger {
    Contribution,
    Violation,
}

/// One point-in-time record of an author's trust state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustSnapshot {
    pub at: DateTime<Utc>,
    pub score: f64,
    pub components: TrustComponents,
    pub trigger: SnapshotTrigger,
}
