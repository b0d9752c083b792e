use serde::{Deserialize, Serialize};

use super::defaults;
use super::{ensure_positive, ensure_unit};
use crate::errors::{KurralError, KurralResult};

/// Reputation engine configuration: component weights, half-lives, and
/// event application parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationConfig {
    pub weights: TrustWeights,
    pub half_lives: HalfLives,
    /// EMA gain applied when folding a new observation into a component.
    pub event_gain: f64,
    /// Cleanliness penalty for a standard violation.
    pub violation_penalty: f64,
    /// Cleanliness penalty for a violation in a high-risk domain.
    pub severe_violation_penalty: f64,
    /// Contributions closer together than this read as a consistent
    /// posting cadence.
    pub consistency_window_days: f64,
}

impl ReputationConfig {
    pub fn validate(&self) -> KurralResult<()> {
        self.weights.validate()?;
        self.half_lives.validate()?;
        ensure_unit("reputation.event_gain", self.event_gain)?;
        ensure_unit("reputation.violation_penalty", self.violation_penalty)?;
        ensure_unit(
            "reputation.severe_violation_penalty",
            self.severe_violation_penalty,
        )?;
        ensure_positive(
            "reputation.consistency_window_days",
            self.consistency_window_days,
        )?;
        Ok(())
    }
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            weights: TrustWeights::default(),
            half_lives: HalfLives::default(),
            event_gain: defaults::DEFAULT_EVENT_GAIN,
            violation_penalty: defaults::DEFAULT_VIOLATION_PENALTY,
            severe_violation_penalty: defaults::DEFAULT_SEVERE_VIOLATION_PENALTY,
            consistency_window_days: defaults::DEFAULT_CONSISTENCY_WINDOW_DAYS,
        }
    }
}

/// Fixed weights for the five trust components. The overall score is
/// always the same weighted sum of the components — these knobs exist
/// for tuning deployments, not for per-author variation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustWeights {
    pub quality: f64,
    pub violation: f64,
    pub engagement: f64,
    pub consistency: f64,
    pub community: f64,
}

impl TrustWeights {
    pub fn validate(&self) -> KurralResult<()> {
        for (name, w) in [
            ("reputation.weights.quality", self.quality),
            ("reputation.weights.violation", self.violation),
            ("reputation.weights.engagement", self.engagement),
            ("reputation.weights.consistency", self.consistency),
            ("reputation.weights.community", self.community),
        ] {
            ensure_unit(name, w)?;
        }
        let sum = self.quality + self.violation + self.engagement + self.consistency + self.community;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(KurralError::InvalidConfig {
                reason: format!("reputation.weights must sum to 1.0, got {sum}"),
            });
        }
        Ok(())
    }
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            quality: defaults::DEFAULT_QUALITY_WEIGHT,
            violation: defaults::DEFAULT_VIOLATION_WEIGHT,
            engagement: defaults::DEFAULT_ENGAGEMENT_WEIGHT,
            consistency: defaults::DEFAULT_CONSISTENCY_WEIGHT,
            community: defaults::DEFAULT_COMMUNITY_WEIGHT,
        }
    }
}

/// Per-component half-lives in days. Shorter means faster forgetting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HalfLives {
    pub violation: f64,
    pub quality: f64,
    pub engagement: f64,
    pub consistency: f64,
    pub community: f64,
}

impl HalfLives {
    pub fn validate(&self) -> KurralResult<()> {
        for (name, hl) in [
            ("reputation.half_lives.violation", self.violation),
            ("reputation.half_lives.quality", self.quality),
            ("reputation.half_lives.engagement", self.engagement),
            ("reputation.half_lives.consistency", self.consistency),
            ("reputation.half_lives.community", self.community),
        ] {
            ensure_positive(name, hl)?;
        }
        Ok(())
    }
}

impl Default for HalfLives {
    fn default() -> Self {
        Self {
            violation: defaults::DEFAULT_VIOLATION_HALF_LIFE_DAYS,
            quality: defaults::DEFAULT_QUALITY_HALF_LIFE_DAYS,
            engagement: defaults::DEFAULT_ENGAGEMENT_HALF_LIFE_DAYS,
            consistency: defaults::DEFAULT_CONSISTENCY_HALF_LIFE_DAYS,
            community: defaults::DEFAULT_COMMUNITY_HALF_LIFE_DAYS,
        }
    }
}
