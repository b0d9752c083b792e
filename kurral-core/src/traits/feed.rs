use chrono::{DateTime, Utc};

use crate::chirp::Chirp;
use crate::config::ForYouConfig;
use crate::models::RankedFeed;
use crate::user::User;

/// Orders candidate chirps into a personalized, explained feed.
/// Pure given its inputs: identical inputs yield identical ordering and
/// identical explanation strings.
pub trait IFeedRanker {
    fn rank(
        &self,
        chirps: &[Chirp],
        viewer_id: Option<&str>,
        config: &ForYouConfig,
        resolve_user: &dyn Fn(&str) -> Option<User>,
        now: DateTime<Utc>,
    ) -> RankedFeed;
}
