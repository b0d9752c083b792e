use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::{debug, info};

use kurral_core::config::ReputationConfig;
use kurral_core::models::{Contribution, Violation, ViolationSeverity};
use kurral_core::score::UnitScore;
use kurral_core::traits::ITrustEngine;
use kurral_core::user::{KurralScore, SnapshotTrigger};

use crate::decay;

/// The reputation engine: one [`KurralScore`] per author.
///
/// Same-author updates are serialized by the map's entry lock, so
/// concurrent `record_*` calls for one author never lose either event;
/// different authors proceed in parallel. Reads never mutate — decay is
/// projected onto a copy at the read instant.
pub struct ReputationEngine {
    scores: DashMap<String, KurralScore>,
    config: ReputationConfig,
}

impl ReputationEngine {
    pub fn new() -> Self {
        Self::with_config(ReputationConfig::default())
    }

    pub fn with_config(config: ReputationConfig) -> Self {
        Self {
            scores: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &ReputationConfig {
        &self.config
    }

    /// Record a quality contribution for an author.
    pub fn record_contribution(
        &self,
        author_id: &str,
        contribution: &Contribution,
        at: DateTime<Utc>,
    ) {
        let mut entry = self
            .scores
            .entry(author_id.to_string())
            .or_insert_with(|| KurralScore::baseline(at));
        let record = entry.value_mut();

        let elapsed = elapsed_days(record.last_updated, at);
        record.components = decay::decay_components(
            &record.components,
            elapsed,
            &self.config.half_lives,
        );

        let gain = self.config.event_gain;
        let c = &mut record.components;
        c.quality_history = UnitScore::new(decay::fold_observation(
            c.quality_history.value(),
            contribution.value.value(),
            gain,
        ));
        if let Some(engagement) = contribution.engagement_quality {
            c.engagement_quality = UnitScore::new(decay::fold_observation(
                c.engagement_quality.value(),
                engagement.value(),
                gain,
            ));
        }
        if let Some(endorsement) = contribution.community_endorsement {
            c.community_trust = UnitScore::new(decay::fold_observation(
                c.community_trust.value(),
                endorsement.value(),
                gain,
            ));
        }
        // Cadence: contributions inside the consistency window read as a
        // steady rhythm; long gaps pull the observation toward zero.
        let cadence = (-elapsed / self.config.consistency_window_days).exp();
        c.consistency = UnitScore::new(decay::fold_observation(
            c.consistency.value(),
            cadence,
            gain,
        ));

        record.recompute(&self.config.weights);
        record.last_updated = at;
        record.push_snapshot(at, SnapshotTrigger::Contribution);

        debug!(
            author = author_id,
            chirp = %contribution.chirp_id,
            score = record.score,
            "contribution recorded"
        );
    }

    /// Record a policy violation against an author.
    pub fn record_violation(&self, author_id: &str, violation: &Violation, at: DateTime<Utc>) {
        let mut entry = self
            .scores
            .entry(author_id.to_string())
            .or_insert_with(|| KurralScore::baseline(at));
        let record = entry.value_mut();

        let elapsed = elapsed_days(record.last_updated, at);
        record.components = decay::decay_components(
            &record.components,
            elapsed,
            &self.config.half_lives,
        );

        let penalty = match violation.severity {
            ViolationSeverity::Standard => self.config.violation_penalty,
            ViolationSeverity::Severe => self.config.severe_violation_penalty,
        };
        let c = &mut record.components;
        c.violation_history = UnitScore::new(c.violation_history.value() - penalty);

        record.recompute(&self.config.weights);
        record.last_updated = at;
        record.push_snapshot(at, SnapshotTrigger::Violation);

        info!(
            author = author_id,
            chirp = %violation.chirp_id,
            severity = ?violation.severity,
            score = record.score,
            "violation recorded"
        );
    }

    /// Pure read: the author's score projected to `now`. Stored state is
    /// untouched, so repeated reads at the same instant agree and
    /// recovery between events is visible.
    pub fn score_at(&self, author_id: &str, now: DateTime<Utc>) -> KurralScore {
        match self.scores.get(author_id) {
            Some(entry) => {
                let record = entry.value();
                let elapsed = elapsed_days(record.last_updated, now);
                let mut projected = record.clone();
                projected.components = decay::decay_components(
                    &record.components,
                    elapsed,
                    &self.config.half_lives,
                );
                projected.recompute(&self.config.weights);
                projected
            }
            None => KurralScore::baseline(now),
        }
    }

    /// Number of authors with a stored record.
    pub fn tracked_authors(&self) -> usize {
        self.scores.len()
    }
}

impl Default for ReputationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ITrustEngine for ReputationEngine {
    fn record_contribution(&self, author_id: &str, contribution: &Contribution, at: DateTime<Utc>) {
        ReputationEngine::record_contribution(self, author_id, contribution, at);
    }

    fn record_violation(&self, author_id: &str, violation: &Violation, at: DateTime<Utc>) {
        ReputationEngine::record_violation(self, author_id, violation, at);
    }

    fn current_score(&self, author_id: &str, now: DateTime<Utc>) -> KurralScore {
        self.score_at(author_id, now)
    }
}

fn elapsed_days(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds().max(0) as f64 / 86_400.0
}
