use serde::{Deserialize, Serialize};

use crate::chirp::{Chirp, ClaimDomain, FactCheckStatus};
use crate::score::UnitScore;

/// A positive reputation event: a clean chirp whose value qualifies it
/// as a quality contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub chirp_id: String,
    /// The chirp's total value score.
    pub value: UnitScore,
    /// Observed engagement quality (e.g. reply depth, re-share ratio),
    /// when the caller has it.
    #[serde(default)]
    pub engagement_quality: Option<UnitScore>,
    /// Community endorsement strength, when the caller has it.
    #[serde(default)]
    pub community_endorsement: Option<UnitScore>,
}

impl Contribution {
    /// Derive a contribution from a chirp, if it qualifies: status must
    /// be `Clean` and the value score must clear the quality bar.
    pub fn from_clean_chirp(chirp: &Chirp) -> Option<Self> {
        if chirp.fact_check_status != FactCheckStatus::Clean {
            return None;
        }
        let value = chirp.value_score?;
        if !value.is_quality() {
            return None;
        }
        Some(Self {
            chirp_id: chirp.id.clone(),
            value: value.total,
            engagement_quality: None,
            community_endorsement: None,
        })
    }
}

/// A negative reputation event, derived from a blocked policy decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub chirp_id: String,
    pub domain: ClaimDomain,
    pub severity: ViolationSeverity,
}

impl Violation {
    /// The policy → reputation wiring point: a `Blocked` status becomes
    /// a violation, severe when the offending claim's domain is
    /// high-risk. Any other status produces no event.
    pub fn from_status(
        chirp_id: impl Into<String>,
        status: FactCheckStatus,
        domain: ClaimDomain,
    ) -> Option<Self> {
        if status != FactCheckStatus::Blocked {
            return None;
        }
        let severity = if domain.risk_level().is_high() {
            ViolationSeverity::Severe
        } else {
            ViolationSeverity::Standard
        };
        Some(Self {
            chirp_id: chirp_id.into(),
            domain,
            severity,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Standard,
    Severe,
}
