/// Kurral engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of trust snapshots retained per author.
/// Older snapshots are rotated out on each update.
pub const MAX_TRUST_HISTORY_SNAPSHOTS: usize = 50;

/// Maximum number of memoized feeds held by the feed cache.
pub const MAX_FEED_CACHE_ENTRIES: u64 = 1024;

/// Trust score ceiling. Scores are always clamped to [0, TRUST_SCORE_MAX].
pub const TRUST_SCORE_MAX: f64 = 100.0;
