use serde::{Deserialize, Deserializer, Serialize};

use crate::score::UnitScore;

/// A verdict + evidence record for one claim, produced by the external
/// verification provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheck {
    /// Foreign key to a [`Claim`](super::Claim) on the same chirp.
    pub claim_id: String,
    pub verdict: Verdict,
    /// Verification confidence. Malformed or missing values deserialize
    /// to 0.0 — treated as unverified rather than rejected.
    #[serde(default = "zero_confidence", deserialize_with = "lenient_confidence")]
    pub confidence: UnitScore,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default)]
    pub caveats: Vec<String>,
}

impl FactCheck {
    pub fn new(claim_id: impl Into<String>, verdict: Verdict, confidence: f64) -> Self {
        Self {
            claim_id: claim_id.into(),
            verdict,
            confidence: UnitScore::new(confidence),
            evidence: Vec::new(),
            caveats: Vec::new(),
        }
    }
}

/// Closed verdict set. The policy engine matches on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    True,
    False,
    Mixed,
    Unverified,
}

/// One supporting source for a fact-check verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub source: String,
    pub snippet: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn zero_confidence() -> UnitScore {
    UnitScore::new(0.0)
}

// Absent and null confidence both collapse to 0.0; NaN is handled by
// UnitScore::new. Out-of-range values clamp.
fn lenient_confidence<'de, D>(deserializer: D) -> Result<UnitScore, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    Ok(UnitScore::new(raw.unwrap_or(0.0)))
}
