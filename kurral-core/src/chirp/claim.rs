use serde::{Deserialize, Serialize};

/// An extracted factual assertion from a chirp's text.
/// Written once by the external verification provider, read-only after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub text: String,
    pub claim_type: ClaimType,
    pub domain: ClaimDomain,
}

impl Claim {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            claim_type: ClaimType::Factual,
            domain: ClaimDomain::General,
        }
    }

    /// Risk level derived from the claim's domain.
    pub fn risk_level(&self) -> RiskLevel {
        self.domain.risk_level()
    }
}

/// The kind of assertion a claim makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Factual,
    Statistical,
    Causal,
    Predictive,
}

/// Subject-matter domain of a claim. Risk level is derived from this,
/// never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimDomain {
    Health,
    Finance,
    Politics,
    General,
}

impl ClaimDomain {
    /// Health, finance, and politics claims carry elevated risk:
    /// ambiguity in these domains pushes a chirp toward review.
    pub fn risk_level(self) -> RiskLevel {
        match self {
            Self::Health | Self::Finance | Self::Politics => RiskLevel::High,
            Self::General => RiskLevel::Standard,
        }
    }
}

impl Default for ClaimDomain {
    fn default() -> Self {
        Self::General
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Standard,
    High,
}

impl RiskLevel {
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}
