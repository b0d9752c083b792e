use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::claim::Claim;
use super::fact_check::FactCheck;
use super::status::FactCheckStatus;
use super::value::ValueScore;

/// A single user-authored content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chirp {
    pub id: String,
    pub author_id: String,
    pub text: String,
    /// Primary topic.
    pub topic: String,
    /// Additional semantic topics extracted from the text.
    pub semantic_topics: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub comment_count: u32,
    /// Externally computed value assessment. Absent until scored.
    pub value_score: Option<ValueScore>,
    pub discussion_role: DiscussionRole,
    /// Claims extracted by the verification provider.
    pub claims: Vec<Claim>,
    /// Verdicts for those claims.
    pub fact_checks: Vec<FactCheck>,
    /// Derived from `claims`/`fact_checks` by the policy engine — always
    /// recomputable, never set independently. Mutate only through
    /// [`Chirp::apply_verification`].
    pub fact_check_status: FactCheckStatus,
}

impl Chirp {
    /// Default-filling constructor: an unverified chirp with no claims,
    /// no value score, and `Clean` status (clean-by-absence).
    pub fn new(
        id: impl Into<String>,
        author_id: impl Into<String>,
        text: impl Into<String>,
        topic: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            author_id: author_id.into(),
            text: text.into(),
            topic: topic.into(),
            semantic_topics: BTreeSet::new(),
            created_at,
            comment_count: 0,
            value_score: None,
            discussion_role: DiscussionRole::Contributor,
            claims: Vec::new(),
            fact_checks: Vec::new(),
            fact_check_status: FactCheckStatus::Clean,
        }
    }

    /// Replace claims, fact-checks, and the derived status together.
    /// This is the one mutation point for verification data, keeping the
    /// status consistent with the evidence it was computed from.
    pub fn apply_verification(
        &mut self,
        claims: Vec<Claim>,
        fact_checks: Vec<FactCheck>,
        status: FactCheckStatus,
    ) {
        self.claims = claims;
        self.fact_checks = fact_checks;
        self.fact_check_status = status;
    }

    /// All topics this chirp touches: primary plus semantic.
    pub fn all_topics(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.topic.as_str()).chain(self.semantic_topics.iter().map(|t| t.as_str()))
    }

    /// Age in hours at `now`. Never negative.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        (now - self.created_at).num_seconds().max(0) as f64 / 3600.0
    }
}

/// Identity equality: two chirps are equal if they have the same ID.
impl PartialEq for Chirp {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// The role a chirp plays in a discussion thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionRole {
    Starter,
    Contributor,
    Amplifier,
    Observer,
}

impl Default for DiscussionRole {
    fn default() -> Self {
        Self::Contributor
    }
}
