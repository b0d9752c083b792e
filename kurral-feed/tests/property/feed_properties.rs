use chrono::{DateTime, Duration, TimeZone, Utc};
use kurral_core::chirp::{Chirp, FactCheckStatus};
use kurral_core::config::ForYouConfig;
use kurral_core::user::User;
use kurral_feed::{FeedEngine, RankContext};
use proptest::prelude::*;

const TOPICS: [&str; 5] = ["science", "politics", "sports", "music", "cooking"];
const AUTHORS: [&str; 3] = ["alice", "bob", "carol"];

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

#[derive(Debug, Clone)]
struct ChirpSpec {
    topic: usize,
    semantic: Vec<usize>,
    author: usize,
    hours_ago: i64,
    comments: u32,
    status: u8,
}

fn arb_chirp() -> impl Strategy<Value = ChirpSpec> {
    (
        0usize..TOPICS.len(),
        prop::collection::vec(0usize..TOPICS.len(), 0..3),
        0usize..AUTHORS.len(),
        0i64..200,
        0u32..100,
        0u8..3,
    )
        .prop_map(|(topic, semantic, author, hours_ago, comments, status)| ChirpSpec {
            topic,
            semantic,
            author,
            hours_ago,
            comments,
            status,
        })
}

fn build_chirps(specs: &[ChirpSpec]) -> Vec<Chirp> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let mut chirp = Chirp::new(
                format!("p{i}"),
                AUTHORS[spec.author],
                "text",
                TOPICS[spec.topic],
                t0() - Duration::hours(spec.hours_ago),
            );
            for s in &spec.semantic {
                chirp.semantic_topics.insert(TOPICS[*s].to_string());
            }
            chirp.comment_count = spec.comments;
            chirp.fact_check_status = match spec.status {
                0 => FactCheckStatus::Clean,
                1 => FactCheckStatus::NeedsReview,
                _ => FactCheckStatus::Blocked,
            };
            chirp
        })
        .collect()
}

fn arb_config() -> impl Strategy<Value = ForYouConfig> {
    (
        prop::collection::btree_set(0usize..TOPICS.len(), 0..3),
        prop::collection::btree_set(0usize..TOPICS.len(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(liked, muted, boost)| {
            let mut config = ForYouConfig::default();
            config.liked_topics = liked.into_iter().map(|i| TOPICS[i].to_string()).collect();
            config.muted_topics = muted.into_iter().map(|i| TOPICS[i].to_string()).collect();
            config.boost_active_conversations = boost;
            config
        })
}

fn rank(chirps: &[Chirp], config: &ForYouConfig) -> kurral_core::models::RankedFeed {
    let mut viewer = User::new("viewer", t0());
    viewer.following.insert("alice".to_string());
    viewer.interests.insert("science".to_string());

    let resolve = move |id: &str| -> Option<User> { (id == "viewer").then(|| viewer.clone()) };
    let ctx = RankContext {
        now: t0(),
        resolve_user: &resolve,
    };
    FeedEngine::new().rank(chirps, Some("viewer"), config, &ctx)
}

// ── Mute is absolute ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn muted_topics_never_surface(specs in prop::collection::vec(arb_chirp(), 0..20), config in arb_config()) {
        let chirps = build_chirps(&specs);
        let feed = rank(&chirps, &config);
        for scored in &feed.chirps {
            prop_assert!(
                !scored.chirp.all_topics().any(|t| config.muted_topics.contains(t)),
                "muted chirp surfaced: {}",
                scored.chirp.id
            );
        }
    }
}

// ── Blocked chirps never surface ─────────────────────────────────────────

proptest! {
    #[test]
    fn blocked_chirps_never_surface(specs in prop::collection::vec(arb_chirp(), 0..20), config in arb_config()) {
        let chirps = build_chirps(&specs);
        let feed = rank(&chirps, &config);
        for scored in &feed.chirps {
            prop_assert!(scored.chirp.fact_check_status != FactCheckStatus::Blocked);
        }
    }
}

// ── Output is ordered and scores are sane ────────────────────────────────

proptest! {
    #[test]
    fn output_is_sorted_descending(specs in prop::collection::vec(arb_chirp(), 0..20), config in arb_config()) {
        let chirps = build_chirps(&specs);
        let feed = rank(&chirps, &config);
        for pair in feed.chirps.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for scored in &feed.chirps {
            prop_assert!(scored.score.is_finite() && scored.score >= 0.0);
        }
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ranking_is_deterministic(specs in prop::collection::vec(arb_chirp(), 0..20), config in arb_config()) {
        let chirps = build_chirps(&specs);
        let first = rank(&chirps, &config);
        let second = rank(&chirps, &config);

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.chirps.iter().zip(second.chirps.iter()) {
            prop_assert_eq!(&a.chirp.id, &b.chirp.id);
            prop_assert_eq!(a.score, b.score);
            prop_assert_eq!(&a.explanation, &b.explanation);
        }
    }
}
