use kurral_core::chirp::{Claim, ClaimDomain, FactCheck, FactCheckStatus, Verdict};
use kurral_policy::PolicyEngine;
use proptest::prelude::*;

fn arb_domain() -> impl Strategy<Value = ClaimDomain> {
    prop_oneof![
        Just(ClaimDomain::Health),
        Just(ClaimDomain::Finance),
        Just(ClaimDomain::Politics),
        Just(ClaimDomain::General),
    ]
}

fn arb_verdict() -> impl Strategy<Value = Verdict> {
    prop_oneof![
        Just(Verdict::True),
        Just(Verdict::False),
        Just(Verdict::Mixed),
        Just(Verdict::Unverified),
    ]
}

fn arb_claims() -> impl Strategy<Value = Vec<(ClaimDomain, Option<(Verdict, f64)>)>> {
    prop::collection::vec(
        (
            arb_domain(),
            prop::option::of((arb_verdict(), prop::num::f64::ANY)),
        ),
        0..8,
    )
}

fn build(spec: &[(ClaimDomain, Option<(Verdict, f64)>)]) -> (Vec<Claim>, Vec<FactCheck>) {
    let mut claims = Vec::new();
    let mut checks = Vec::new();
    for (i, (domain, check)) in spec.iter().enumerate() {
        let id = format!("c{i}");
        let mut claim = Claim::new(id.clone(), "generated");
        claim.domain = *domain;
        claims.push(claim);
        if let Some((verdict, confidence)) = check {
            checks.push(FactCheck::new(id, *verdict, *confidence));
        }
    }
    (claims, checks)
}

// ── Severity precedence ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn any_high_confidence_false_blocks_the_post(spec in arb_claims()) {
        let (mut claims, mut checks) = build(&spec);
        let mut poisoned = Claim::new("poison", "definitely false");
        poisoned.domain = ClaimDomain::General;
        claims.push(poisoned);
        checks.push(FactCheck::new("poison", Verdict::False, 0.9));

        let engine = PolicyEngine::new();
        prop_assert_eq!(
            engine.decide_status(&claims, &checks),
            FactCheckStatus::Blocked
        );
    }
}

// ── Totality: never panics, always one of the three states ──────────────

proptest! {
    #[test]
    fn decide_status_is_total(spec in arb_claims()) {
        let (claims, checks) = build(&spec);
        let engine = PolicyEngine::new();
        let status = engine.decide_status(&claims, &checks);
        prop_assert!(matches!(
            status,
            FactCheckStatus::Clean | FactCheckStatus::NeedsReview | FactCheckStatus::Blocked
        ));
    }
}

// ── Post status dominates every per-claim status ─────────────────────────

proptest! {
    #[test]
    fn post_status_is_worst_claim_status(spec in arb_claims()) {
        let (claims, checks) = build(&spec);
        let engine = PolicyEngine::new();
        let breakdown = engine.decide_breakdown(&claims, &checks);
        for decision in &breakdown.decisions {
            prop_assert!(decision.status <= breakdown.status);
        }
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn decisions_are_deterministic(spec in arb_claims()) {
        let (claims, checks) = build(&spec);
        let engine = PolicyEngine::new();
        prop_assert_eq!(
            engine.decide_status(&claims, &checks),
            engine.decide_status(&claims, &checks)
        );
    }
}
