use chrono::{DateTime, Utc};
use tracing::debug;

use kurral_core::chirp::{Chirp, FactCheckStatus};
use kurral_core::config::{FeedConfig, ForYouConfig};
use kurral_core::models::{FeedDiagnosis, RankedFeed, ScoredChirp};
use kurral_core::traits::IFeedRanker;
use kurral_core::user::User;

use crate::ranking::scorer::{self, SignalWeights};
use crate::why;

/// Everything the ranking pass needs beyond the candidates themselves.
///
/// `now` is passed in rather than read from the clock so a ranking pass
/// is reproducible; `resolve_user` is the caller's user lookup.
pub struct RankContext<'a> {
    pub now: DateTime<Utc>,
    pub resolve_user: &'a dyn Fn(&str) -> Option<User>,
}

/// The "For You" scorer.
///
/// Stateless between calls — rank whenever candidates, viewer, or config
/// change. Filtering the viewer's own chirps out of their feed is the
/// caller's job (the latest-feed collaborator does it); this engine
/// ranks whatever candidates it is given.
pub struct FeedEngine {
    config: FeedConfig,
    weights: SignalWeights,
}

impl FeedEngine {
    pub fn new() -> Self {
        Self::with_config(FeedConfig::default())
    }

    pub fn with_config(config: FeedConfig) -> Self {
        let weights = SignalWeights::from(&config);
        Self { config, weights }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Rank candidates into a personalized feed.
    ///
    /// Hard exclusions come first and are never outscored: chirps on a
    /// muted topic (primary or semantic) and `blocked` chirps are
    /// dropped before any signal is computed. An empty result carries a
    /// diagnosis instead of scores.
    pub fn rank(
        &self,
        chirps: &[Chirp],
        viewer_id: Option<&str>,
        config: &ForYouConfig,
        ctx: &RankContext<'_>,
    ) -> RankedFeed {
        let Some(viewer_id) = viewer_id else {
            return RankedFeed::empty(FeedDiagnosis::NotPersonalized);
        };
        let Some(viewer) = (ctx.resolve_user)(viewer_id) else {
            return RankedFeed::empty(FeedDiagnosis::NotPersonalized);
        };

        let mut muted_out = 0usize;
        let mut blocked_out = 0usize;
        let candidates: Vec<&Chirp> = chirps
            .iter()
            .filter(|chirp| {
                if chirp.all_topics().any(|t| config.is_muted(t)) {
                    muted_out += 1;
                    return false;
                }
                if chirp.fact_check_status == FactCheckStatus::Blocked {
                    blocked_out += 1;
                    return false;
                }
                true
            })
            .collect();

        if candidates.is_empty() {
            let diagnosis = if muted_out > 0 && !config.muted_topics.is_empty() {
                FeedDiagnosis::OverMuted {
                    muted_topics: config.muted_topics.len(),
                }
            } else {
                FeedDiagnosis::NoSignals
            };
            debug!(
                viewer = viewer_id,
                muted_out, blocked_out, %diagnosis,
                "feed empty after exclusion"
            );
            return RankedFeed::empty(diagnosis);
        }

        let mut scored: Vec<(Chirp, scorer::SignalBreakdown, String)> = candidates
            .into_iter()
            .map(|chirp| {
                let breakdown =
                    scorer::score(chirp, &viewer, config, &self.config, &self.weights, ctx.now);
                let explanation = why::build_explanation(&breakdown, &self.weights);
                (chirp.clone(), breakdown, explanation)
            })
            .collect();

        scorer::sort_scored(&mut scored);

        debug!(
            viewer = viewer_id,
            ranked = scored.len(),
            muted_out,
            blocked_out,
            "feed ranked"
        );

        RankedFeed {
            chirps: scored
                .into_iter()
                .map(|(chirp, breakdown, explanation)| ScoredChirp {
                    chirp,
                    score: breakdown.total,
                    explanation,
                })
                .collect(),
            diagnosis: None,
        }
    }
}

impl Default for FeedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IFeedRanker for FeedEngine {
    fn rank(
        &self,
        chirps: &[Chirp],
        viewer_id: Option<&str>,
        config: &ForYouConfig,
        resolve_user: &dyn Fn(&str) -> Option<User>,
        now: DateTime<Utc>,
    ) -> RankedFeed {
        let ctx = RankContext { now, resolve_user };
        FeedEngine::rank(self, chirps, viewer_id, config, &ctx)
    }
}
