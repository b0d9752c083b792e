use kurral_core::chirp::Chirp;
use kurral_core::config::ForYouConfig;

/// Conversation-activity signal: comment volume, saturating at
/// `saturation` comments. Zero unless the viewer opted into boosting
/// active conversations.
pub fn calculate(chirp: &Chirp, config: &ForYouConfig, saturation: f64) -> f64 {
    if !config.boost_active_conversations {
        return 0.0;
    }
    (chirp.comment_count as f64 / saturation).min(1.0)
}
