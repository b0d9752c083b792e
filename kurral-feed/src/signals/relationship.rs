use kurral_core::config::ForYouConfig;
use kurral_core::user::User;

/// Relationship signal: the viewer's following-weight multiplier for
/// followed authors, 0.0 for everyone else.
pub fn calculate(author_id: &str, viewer: &User, config: &ForYouConfig) -> f64 {
    if viewer.follows(author_id) {
        config.following_weight.multiplier()
    } else {
        0.0
    }
}
