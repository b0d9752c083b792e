pub mod defaults;
pub mod feed_config;
pub mod for_you;
pub mod policy_config;
pub mod reputation_config;
pub mod tuning_config;

pub use feed_config::FeedConfig;
pub use for_you::{FollowingWeight, ForYouConfig};
pub use policy_config::PolicyConfig;
pub use reputation_config::{HalfLives, ReputationConfig, TrustWeights};
pub use tuning_config::TuningConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{KurralError, KurralResult};

/// Top-level engine configuration, one section per subsystem.
/// Every field has a default; a TOML override file only needs the keys
/// it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KurralConfig {
    pub policy: PolicyConfig,
    pub reputation: ReputationConfig,
    pub feed: FeedConfig,
    pub tuning: TuningConfig,
}

impl KurralConfig {
    /// Parse a TOML override file and validate the result.
    pub fn from_toml_str(input: &str) -> KurralResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range thresholds and weights before any engine
    /// runs with them.
    pub fn validate(&self) -> KurralResult<()> {
        self.policy.validate()?;
        self.reputation.validate()?;
        self.feed.validate()?;
        self.tuning.validate()?;
        Ok(())
    }
}

pub(crate) fn ensure_unit(name: &str, value: f64) -> KurralResult<()> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(KurralError::InvalidConfig {
            reason: format!("{name} must be in [0, 1], got {value}"),
        });
    }
    Ok(())
}

pub(crate) fn ensure_positive(name: &str, value: f64) -> KurralResult<()> {
    if !(value > 0.0) {
        return Err(KurralError::InvalidConfig {
            reason: format!("{name} must be positive, got {value}"),
        });
    }
    Ok(())
}
