use serde::{Deserialize, Serialize};

use super::defaults;
use super::ensure_unit;
use crate::errors::{KurralError, KurralResult};

/// Policy engine thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// A false verdict at or above this confidence blocks the chirp.
    pub block_confidence: f64,
    /// High-risk claims verified below this confidence stay in review.
    pub review_confidence: f64,
}

impl PolicyConfig {
    pub fn validate(&self) -> KurralResult<()> {
        ensure_unit("policy.block_confidence", self.block_confidence)?;
        ensure_unit("policy.review_confidence", self.review_confidence)?;
        if self.review_confidence > self.block_confidence {
            return Err(KurralError::InvalidConfig {
                reason: format!(
                    "policy.review_confidence ({}) must not exceed policy.block_confidence ({})",
                    self.review_confidence, self.block_confidence
                ),
            });
        }
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            block_confidence: defaults::DEFAULT_BLOCK_CONFIDENCE,
            review_confidence: defaults::DEFAULT_REVIEW_CONFIDENCE,
        }
    }
}
