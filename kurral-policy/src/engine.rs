use tracing::debug;

use kurral_core::chirp::{Chirp, Claim, ClaimDomain, FactCheck, FactCheckStatus};
use kurral_core::config::PolicyConfig;
use kurral_core::traits::IPolicyEngine;

use crate::classify;

/// The fact-check policy engine.
///
/// Stateless: `decide_status` is a pure fold over current evidence, so
/// the engine can be shared freely and called in parallel.
pub struct PolicyEngine {
    config: PolicyConfig,
}

impl PolicyEngine {
    pub fn new() -> Self {
        Self {
            config: PolicyConfig::default(),
        }
    }

    pub fn with_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Reduce claims and fact-checks to a post-level status.
    ///
    /// Total: no claims means `Clean` (clean-by-absence — a chirp is not
    /// blocked while verification is still pending). Fact-checks whose
    /// `claim_id` matches no claim are ignored.
    pub fn decide_status(&self, claims: &[Claim], fact_checks: &[FactCheck]) -> FactCheckStatus {
        let status = claims
            .iter()
            .map(|claim| self.classify_one(claim, fact_checks))
            .max()
            .unwrap_or(FactCheckStatus::Clean);

        debug!(
            claims = claims.len(),
            fact_checks = fact_checks.len(),
            %status,
            "policy decision"
        );
        status
    }

    /// Decide with a per-claim breakdown for observability and for
    /// deriving violation events.
    pub fn decide_breakdown(&self, claims: &[Claim], fact_checks: &[FactCheck]) -> PolicyBreakdown {
        let decisions: Vec<ClaimDecision> = claims
            .iter()
            .map(|claim| ClaimDecision {
                claim_id: claim.id.clone(),
                domain: claim.domain,
                status: self.classify_one(claim, fact_checks),
            })
            .collect();

        let status = decisions
            .iter()
            .map(|d| d.status)
            .max()
            .unwrap_or(FactCheckStatus::Clean);

        PolicyBreakdown { decisions, status }
    }

    /// Convenience over a chirp's own evidence.
    pub fn decide_chirp(&self, chirp: &Chirp) -> FactCheckStatus {
        self.decide_status(&chirp.claims, &chirp.fact_checks)
    }

    /// Recompute statuses for a batch of chirps.
    pub fn process_batch(&self, chirps: &[Chirp]) -> Vec<FactCheckStatus> {
        chirps.iter().map(|c| self.decide_chirp(c)).collect()
    }

    fn classify_one(&self, claim: &Claim, fact_checks: &[FactCheck]) -> FactCheckStatus {
        let checks = fact_checks.iter().filter(|fc| fc.claim_id == claim.id);
        classify::classify_claim(claim, checks, &self.config)
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IPolicyEngine for PolicyEngine {
    fn decide_status(&self, claims: &[Claim], fact_checks: &[FactCheck]) -> FactCheckStatus {
        PolicyEngine::decide_status(self, claims, fact_checks)
    }
}

/// Per-claim decisions behind a post-level status.
#[derive(Debug, Clone)]
pub struct PolicyBreakdown {
    pub decisions: Vec<ClaimDecision>,
    pub status: FactCheckStatus,
}

impl PolicyBreakdown {
    /// The first claim that reached the post-level status. Useful for
    /// attributing a violation to a domain when the status is `Blocked`.
    pub fn worst_claim(&self) -> Option<&ClaimDecision> {
        self.decisions.iter().find(|d| d.status == self.status)
    }
}

#[derive(Debug, Clone)]
pub struct ClaimDecision {
    pub claim_id: String,
    pub domain: ClaimDomain,
    pub status: FactCheckStatus,
}
