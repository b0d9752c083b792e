use kurral_core::chirp::Chirp;
use kurral_core::config::ForYouConfig;
use kurral_core::user::User;

/// Topics this chirp shares with the viewer's liked topics or declared
/// interests, primary topic first. Order is deterministic (primary, then
/// semantic topics in set order).
pub fn matching_topics<'a>(chirp: &'a Chirp, viewer: &User, config: &ForYouConfig) -> Vec<&'a str> {
    chirp
        .all_topics()
        .filter(|t| config.liked_topics.contains(*t) || viewer.interests.contains(*t))
        .collect()
}

/// Topic-affinity signal: overlap size, saturating at
/// `saturation` matches.
pub fn calculate(overlap: usize, saturation: usize) -> f64 {
    (overlap as f64 / saturation.max(1) as f64).min(1.0)
}
