use chrono::{Duration, TimeZone, Utc};
use kurral_core::chirp::ClaimDomain;
use kurral_core::constants::MAX_TRUST_HISTORY_SNAPSHOTS;
use kurral_core::models::{Contribution, Violation, ViolationSeverity};
use kurral_core::score::UnitScore;
use kurral_reputation::ReputationEngine;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Event {
    Contribution { value: f64, hours_later: u32 },
    Violation { severe: bool, hours_later: u32 },
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0.0f64..=1.0, 0u32..2000).prop_map(|(value, hours_later)| Event::Contribution {
            value,
            hours_later
        }),
        (any::<bool>(), 0u32..2000).prop_map(|(severe, hours_later)| Event::Violation {
            severe,
            hours_later
        }),
    ]
}

// ── Score bounds under arbitrary event sequences ─────────────────────────

proptest! {
    #[test]
    fn score_stays_in_bounds(events in prop::collection::vec(arb_event(), 0..60)) {
        let engine = ReputationEngine::new();
        let mut at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        for event in &events {
            match event {
                Event::Contribution { value, hours_later } => {
                    at += Duration::hours(*hours_later as i64);
                    let c = Contribution {
                        chirp_id: "p".to_string(),
                        value: UnitScore::new(*value),
                        engagement_quality: None,
                        community_endorsement: None,
                    };
                    engine.record_contribution("author", &c, at);
                }
                Event::Violation { severe, hours_later } => {
                    at += Duration::hours(*hours_later as i64);
                    let v = Violation {
                        chirp_id: "p".to_string(),
                        domain: ClaimDomain::General,
                        severity: if *severe {
                            ViolationSeverity::Severe
                        } else {
                            ViolationSeverity::Standard
                        },
                    };
                    engine.record_violation("author", &v, at);
                }
            }
            let score = engine.score_at("author", at).score;
            prop_assert!((0.0..=100.0).contains(&score), "score out of bounds: {}", score);
        }
    }
}

// ── Recovery is monotone after a single violation ────────────────────────

proptest! {
    #[test]
    fn recovery_is_monotone(severe in any::<bool>(), checkpoints in prop::collection::vec(1i64..800, 1..12)) {
        let engine = ReputationEngine::new();
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let v = Violation {
            chirp_id: "p".to_string(),
            domain: ClaimDomain::Politics,
            severity: if severe {
                ViolationSeverity::Severe
            } else {
                ViolationSeverity::Standard
            },
        };
        engine.record_violation("author", &v, t0);

        let mut days: Vec<i64> = checkpoints;
        days.sort_unstable();

        let mut prev = engine.score_at("author", t0).score;
        for day in days {
            let score = engine.score_at("author", t0 + Duration::days(day)).score;
            prop_assert!(
                score + 1e-9 >= prev,
                "violation influence grew over time: {} then {}",
                prev,
                score
            );
            prev = score;
        }
    }
}

// ── History never exceeds the retention cap ──────────────────────────────

proptest! {
    #[test]
    fn history_is_bounded(event_count in 0usize..120) {
        let engine = ReputationEngine::new();
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        for i in 0..event_count {
            let c = Contribution {
                chirp_id: format!("p{i}"),
                value: UnitScore::new(0.9),
                engagement_quality: None,
                community_endorsement: None,
            };
            engine.record_contribution("author", &c, t0 + Duration::hours(i as i64));
        }
        let score = engine.score_at("author", t0 + Duration::days(30));
        prop_assert!(score.history.len() <= MAX_TRUST_HISTORY_SNAPSHOTS);
        prop_assert_eq!(score.history.len(), event_count.min(MAX_TRUST_HISTORY_SNAPSHOTS));
    }
}
