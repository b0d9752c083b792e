use kurral_core::chirp::{Claim, FactCheck, FactCheckStatus, Verdict};
use kurral_core::config::PolicyConfig;

/// Classify a single claim against one fact-check.
///
/// - `Blocked` when the verdict is false at or above the block threshold.
/// - `NeedsReview` when the claim's domain is high-risk and the check is
///   inconclusive (confidence below the review threshold, or a mixed
///   verdict).
/// - `Clean` otherwise.
///
/// Confidence is a [`UnitScore`](kurral_core::score::UnitScore), so
/// malformed values were already collapsed to 0.0 at the boundary —
/// which pushes a risky claim toward review, never toward clean.
pub fn classify_pair(claim: &Claim, check: &FactCheck, config: &PolicyConfig) -> FactCheckStatus {
    let confidence = check.confidence.value();

    if check.verdict == Verdict::False && confidence >= config.block_confidence {
        return FactCheckStatus::Blocked;
    }

    if claim.risk_level().is_high()
        && (confidence < config.review_confidence || check.verdict == Verdict::Mixed)
    {
        return FactCheckStatus::NeedsReview;
    }

    FactCheckStatus::Clean
}

/// Classify a claim against all of its fact-checks.
///
/// No fact-check yet means a high-risk claim waits in review while a
/// standard one passes clean. With several checks (re-verification), the
/// worst class wins — a later check can tighten the status, never mask
/// an earlier blocked one.
pub fn classify_claim<'a>(
    claim: &Claim,
    checks: impl Iterator<Item = &'a FactCheck>,
    config: &PolicyConfig,
) -> FactCheckStatus {
    let mut saw_check = false;
    let mut worst = FactCheckStatus::Clean;

    for check in checks {
        saw_check = true;
        worst = worst.max(classify_pair(claim, check, config));
    }

    if !saw_check && claim.risk_level().is_high() {
        return FactCheckStatus::NeedsReview;
    }

    worst
}
