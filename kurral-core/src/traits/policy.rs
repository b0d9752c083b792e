use crate::chirp::{Claim, FactCheck, FactCheckStatus};

/// Reduces a chirp's claims and fact-checks to a visibility status.
/// Pure and total: no claims means `Clean`.
pub trait IPolicyEngine {
    fn decide_status(&self, claims: &[Claim], fact_checks: &[FactCheck]) -> FactCheckStatus;
}
