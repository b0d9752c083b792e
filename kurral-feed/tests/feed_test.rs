use chrono::{DateTime, Duration, TimeZone, Utc};
use kurral_core::chirp::{Chirp, FactCheckStatus, ValueScore};
use kurral_core::config::{FollowingWeight, ForYouConfig};
use kurral_core::models::FeedDiagnosis;
use kurral_core::user::User;
use kurral_feed::{FeedEngine, RankContext};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn make_chirp(id: &str, author: &str, topic: &str, hours_ago: i64) -> Chirp {
    Chirp::new(id, author, format!("chirp {id}"), topic, t0() - Duration::hours(hours_ago))
}

fn make_viewer(follows: &[&str], interests: &[&str]) -> User {
    let mut viewer = User::new("viewer", t0());
    viewer.following = follows.iter().map(|s| s.to_string()).collect();
    viewer.interests = interests.iter().map(|s| s.to_string()).collect();
    viewer
}

fn rank_for(
    engine: &FeedEngine,
    chirps: &[Chirp],
    viewer: &User,
    config: &ForYouConfig,
) -> kurral_core::models::RankedFeed {
    let viewer = viewer.clone();
    let resolve = move |id: &str| -> Option<User> {
        (id == viewer.id).then(|| viewer.clone())
    };
    let ctx = RankContext {
        now: t0(),
        resolve_user: &resolve,
    };
    engine.rank(chirps, Some("viewer"), config, &ctx)
}

#[test]
fn muted_topic_is_excluded_regardless_of_other_signals() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&["alice"], &[]);
    let mut config = ForYouConfig::default();
    config.following_weight = FollowingWeight::Heavy;
    config.muted_topics.insert("politics".to_string());

    // Followed author, high value — muting still wins.
    let mut chirp = make_chirp("p1", "alice", "politics", 1);
    chirp.value_score = Some(ValueScore::new(1.0));

    let feed = rank_for(&engine, &[chirp], &viewer, &config);
    assert!(feed.is_empty());
    assert_eq!(
        feed.diagnosis,
        Some(FeedDiagnosis::OverMuted { muted_topics: 1 })
    );
}

#[test]
fn semantic_topic_mute_also_excludes() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &[]);
    let mut config = ForYouConfig::default();
    config.muted_topics.insert("crypto".to_string());

    let mut chirp = make_chirp("p1", "bob", "finance", 1);
    chirp.semantic_topics.insert("crypto".to_string());

    let feed = rank_for(&engine, &[chirp], &viewer, &config);
    assert!(feed.is_empty());
}

#[test]
fn blocked_chirps_never_appear() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&["alice"], &[]);
    let config = ForYouConfig::default();

    let mut blocked = make_chirp("p1", "alice", "science", 1);
    blocked.fact_check_status = FactCheckStatus::Blocked;
    let clean = make_chirp("p2", "alice", "science", 2);

    let feed = rank_for(&engine, &[blocked, clean], &viewer, &config);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed.chirps[0].chirp.id, "p2");
}

#[test]
fn needs_review_is_dampened_not_excluded() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&["alice"], &[]);
    let config = ForYouConfig::default();

    let clean = make_chirp("p1", "alice", "science", 1);
    let mut review = make_chirp("p2", "alice", "science", 1);
    review.fact_check_status = FactCheckStatus::NeedsReview;

    let feed = rank_for(&engine, &[review.clone(), clean], &viewer, &config);
    assert_eq!(feed.len(), 2);
    assert_eq!(feed.chirps[0].chirp.id, "p1");
    assert!(feed.chirps[0].score > feed.chirps[1].score);
}

#[test]
fn followed_author_outranks_stranger() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&["alice"], &[]);
    let config = ForYouConfig::default();

    let followed = make_chirp("p1", "alice", "cooking", 2);
    let stranger = make_chirp("p2", "bob", "cooking", 2);

    let feed = rank_for(&engine, &[stranger, followed], &viewer, &config);
    assert_eq!(feed.chirps[0].chirp.id, "p1");
}

#[test]
fn following_weight_none_removes_the_advantage() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&["alice"], &[]);
    let mut config = ForYouConfig::default();
    config.following_weight = FollowingWeight::None;

    let followed = make_chirp("p1", "alice", "cooking", 2);
    let stranger = make_chirp("p2", "bob", "cooking", 2);

    let feed = rank_for(&engine, &[followed, stranger], &viewer, &config);
    assert_eq!(feed.chirps[0].score, feed.chirps[1].score);
}

#[test]
fn liked_topic_boosts_rank() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &[]);
    let mut config = ForYouConfig::default();
    config.liked_topics.insert("science".to_string());

    let liked = make_chirp("p1", "bob", "science", 2);
    let other = make_chirp("p2", "bob", "sports", 2);

    let feed = rank_for(&engine, &[other, liked], &viewer, &config);
    assert_eq!(feed.chirps[0].chirp.id, "p1");
    assert!(feed.chirps[0].explanation.contains("science"));
}

#[test]
fn viewer_interests_count_toward_affinity() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &["astronomy"]);
    let config = ForYouConfig::default();

    let matching = make_chirp("p1", "bob", "astronomy", 2);
    let other = make_chirp("p2", "bob", "sports", 2);

    let feed = rank_for(&engine, &[other, matching], &viewer, &config);
    assert_eq!(feed.chirps[0].chirp.id, "p1");
}

#[test]
fn older_chirps_fade() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &[]);
    let config = ForYouConfig::default();

    let fresh = make_chirp("p1", "bob", "sports", 1);
    let stale = make_chirp("p2", "bob", "sports", 48);

    let feed = rank_for(&engine, &[stale, fresh], &viewer, &config);
    assert_eq!(feed.chirps[0].chirp.id, "p1");
    assert!(feed.chirps[0].score > feed.chirps[1].score);
}

#[test]
fn conversation_boost_requires_opt_in() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &[]);

    let mut busy = make_chirp("p1", "bob", "sports", 2);
    busy.comment_count = 30;
    let quiet = make_chirp("p2", "bob", "sports", 2);

    let config = ForYouConfig::default();
    let feed = rank_for(&engine, &[busy.clone(), quiet.clone()], &viewer, &config);
    assert_eq!(feed.chirps[0].score, feed.chirps[1].score, "no boost without opt-in");

    let mut config = ForYouConfig::default();
    config.boost_active_conversations = true;
    let feed = rank_for(&engine, &[busy, quiet], &viewer, &config);
    assert_eq!(feed.chirps[0].chirp.id, "p1");
    assert!(feed.chirps[0].explanation.contains("Active discussion"));
}

#[test]
fn unscored_value_is_neutral_not_zero() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &[]);
    let config = ForYouConfig::default();

    let mut low_value = make_chirp("p1", "bob", "sports", 2);
    low_value.value_score = Some(ValueScore::new(0.1));
    let unscored = make_chirp("p2", "bob", "sports", 2);

    let feed = rank_for(&engine, &[low_value, unscored], &viewer, &config);
    assert_eq!(feed.chirps[0].chirp.id, "p2", "neutral must beat a poor value score");
}

#[test]
fn exact_ties_order_newer_then_id() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &[]);
    let config = ForYouConfig::default();

    // Identical signals and identical age: the timestamp tie falls
    // through to id ascending, keeping the order total.
    let a = make_chirp("b-later-id", "bob", "sports", 3);
    let b = make_chirp("a-early-id", "bob", "sports", 3);
    let feed = rank_for(&engine, &[a, b], &viewer, &config);
    assert_eq!(feed.chirps[0].chirp.id, "a-early-id");

    // Identical signals, one second apart: the newer chirp wins — by
    // recency when it moves the score, by the timestamp tie-break when
    // it is too small to.
    let older = make_chirp("p-old", "bob", "sports", 3);
    let newer = Chirp {
        id: "p-new".to_string(),
        created_at: older.created_at + Duration::seconds(1),
        ..older.clone()
    };
    let feed = rank_for(&engine, &[older, newer], &viewer, &config);
    assert_eq!(feed.chirps[0].chirp.id, "p-new");
}

#[test]
fn identical_inputs_give_identical_output() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&["alice"], &["science"]);
    let mut config = ForYouConfig::default();
    config.liked_topics.insert("cooking".to_string());
    config.boost_active_conversations = true;

    let mut chirps = Vec::new();
    for i in 0..12 {
        let author = if i % 3 == 0 { "alice" } else { "bob" };
        let topic = match i % 4 {
            0 => "science",
            1 => "cooking",
            2 => "sports",
            _ => "music",
        };
        let mut chirp = make_chirp(&format!("p{i}"), author, topic, i as i64);
        chirp.comment_count = (i * 5) as u32;
        chirps.push(chirp);
    }

    let first = rank_for(&engine, &chirps, &viewer, &config);
    let second = rank_for(&engine, &chirps, &viewer, &config);

    let ids: Vec<&str> = first.chirps.iter().map(|s| s.chirp.id.as_str()).collect();
    let ids2: Vec<&str> = second.chirps.iter().map(|s| s.chirp.id.as_str()).collect();
    assert_eq!(ids, ids2);

    let explanations: Vec<&str> = first.chirps.iter().map(|s| s.explanation.as_str()).collect();
    let explanations2: Vec<&str> = second.chirps.iter().map(|s| s.explanation.as_str()).collect();
    assert_eq!(explanations, explanations2);
}

#[test]
fn no_viewer_means_not_personalized() {
    let engine = FeedEngine::new();
    let chirps = vec![make_chirp("p1", "bob", "sports", 1)];
    let resolve = |_: &str| -> Option<User> { None };
    let ctx = RankContext {
        now: t0(),
        resolve_user: &resolve,
    };

    let feed = engine.rank(&chirps, None, &ForYouConfig::default(), &ctx);
    assert!(feed.is_empty());
    assert_eq!(feed.diagnosis, Some(FeedDiagnosis::NotPersonalized));
}

#[test]
fn unresolvable_viewer_means_not_personalized() {
    let engine = FeedEngine::new();
    let chirps = vec![make_chirp("p1", "bob", "sports", 1)];
    let resolve = |_: &str| -> Option<User> { None };
    let ctx = RankContext {
        now: t0(),
        resolve_user: &resolve,
    };

    let feed = engine.rank(&chirps, Some("ghost"), &ForYouConfig::default(), &ctx);
    assert_eq!(feed.diagnosis, Some(FeedDiagnosis::NotPersonalized));
}

#[test]
fn empty_candidates_without_mutes_diagnoses_no_signals() {
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &[]);
    let feed = rank_for(&engine, &[], &viewer, &ForYouConfig::default());
    assert_eq!(feed.diagnosis, Some(FeedDiagnosis::NoSignals));
}

#[test]
fn viewers_own_chirps_are_not_filtered_here() {
    // Excluding the viewer's own chirps is the caller's job; the engine
    // ranks whatever it is handed.
    let engine = FeedEngine::new();
    let viewer = make_viewer(&[], &[]);
    let own = make_chirp("p1", "viewer", "sports", 1);
    let feed = rank_for(&engine, &[own], &viewer, &ForYouConfig::default());
    assert_eq!(feed.len(), 1);
}
