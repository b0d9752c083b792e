use chrono::{DateTime, Utc};

use crate::models::{Contribution, Violation};
use crate::user::KurralScore;

/// Maintains one [`KurralScore`] per author.
///
/// Writes for the same author must be serialized by the implementation;
/// reads are pure and reflect decay up to the read instant.
pub trait ITrustEngine {
    fn record_contribution(&self, author_id: &str, contribution: &Contribution, at: DateTime<Utc>);
    fn record_violation(&self, author_id: &str, violation: &Violation, at: DateTime<Utc>);
    /// Current score for an author, projected to `now`. Unknown authors
    /// get the baseline record.
    fn current_score(&self, author_id: &str, now: DateTime<Utc>) -> KurralScore;
}
