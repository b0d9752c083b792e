use serde::{Deserialize, Serialize};

use crate::score::UnitScore;

/// Externally computed value assessment of a chirp.
/// `total` is the headline number; sub-components explain it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueScore {
    pub total: UnitScore,
    pub insight: UnitScore,
    pub originality: UnitScore,
    pub civility: UnitScore,
}

impl ValueScore {
    pub fn new(total: f64) -> Self {
        Self {
            total: UnitScore::new(total),
            ..Default::default()
        }
    }

    /// Whether this chirp qualifies as a quality contribution for
    /// reputation purposes.
    pub fn is_quality(&self) -> bool {
        self.total.is_high()
    }
}
