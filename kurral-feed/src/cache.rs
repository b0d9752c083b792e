use std::sync::Arc;

use moka::sync::Cache;

use kurral_core::config::ForYouConfig;
use kurral_core::constants::MAX_FEED_CACHE_ENTRIES;
use kurral_core::errors::KurralResult;
use kurral_core::models::RankedFeed;

/// Memoization key for a ranked feed: any of the three inputs changing
/// produces a different key, which is the whole invalidation story.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedCacheKey {
    pub viewer_id: String,
    /// blake3 fingerprint of the viewer's [`ForYouConfig`].
    pub config_hash: String,
    /// Monotonic version of the candidate set, owned by the caller.
    pub candidate_version: u64,
}

impl FeedCacheKey {
    pub fn new(
        viewer_id: impl Into<String>,
        config: &ForYouConfig,
        candidate_version: u64,
    ) -> KurralResult<Self> {
        Ok(Self {
            viewer_id: viewer_id.into(),
            config_hash: config.fingerprint()?,
            candidate_version,
        })
    }
}

/// Bounded memo of ranked feeds.
///
/// Ranking is pure, so a cached feed is exactly what a fresh rank would
/// produce for the same key.
pub struct FeedCache {
    inner: Cache<FeedCacheKey, Arc<RankedFeed>>,
}

impl FeedCache {
    pub fn new() -> Self {
        Self::with_capacity(MAX_FEED_CACHE_ENTRIES)
    }

    pub fn with_capacity(max_entries: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_entries)
                .support_invalidation_closures()
                .build(),
        }
    }

    /// Return the memoized feed for `key`, ranking once on a miss.
    pub fn get_or_rank(
        &self,
        key: FeedCacheKey,
        rank: impl FnOnce() -> RankedFeed,
    ) -> Arc<RankedFeed> {
        self.inner.get_with(key, || Arc::new(rank()))
    }

    pub fn get(&self, key: &FeedCacheKey) -> Option<Arc<RankedFeed>> {
        self.inner.get(key)
    }

    /// Drop every memoized feed for one viewer — e.g. after their
    /// follows change in a way the candidate version doesn't capture.
    pub fn invalidate_viewer(&self, viewer_id: &str) {
        let viewer_id = viewer_id.to_string();
        // The predicate registration only fails if closure support was
        // not enabled on the builder, which `with_capacity` always does.
        let _ = self
            .inner
            .invalidate_entries_if(move |key, _| key.viewer_id == viewer_id);
        self.inner.run_pending_tasks();
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

impl Default for FeedCache {
    fn default() -> Self {
        Self::new()
    }
}
