use serde::{Deserialize, Serialize};
use std::fmt;

/// Post-level visibility state derived from a chirp's claims and
/// fact-checks.
///
/// Severity precedence is the variant order: `Clean < NeedsReview <
/// Blocked`. A chirp's status is the worst class across its claims —
/// never an average — so a single high-confidence false claim blocks the
/// whole chirp regardless of how many other claims verified true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactCheckStatus {
    Clean,
    NeedsReview,
    Blocked,
}

impl FactCheckStatus {
    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    pub fn needs_review(self) -> bool {
        matches!(self, Self::NeedsReview)
    }
}

impl Default for FactCheckStatus {
    fn default() -> Self {
        Self::Clean
    }
}

impl fmt::Display for FactCheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Clean => "clean",
            Self::NeedsReview => "needs_review",
            Self::Blocked => "blocked",
        };
        write!(f, "{s}")
    }
}
