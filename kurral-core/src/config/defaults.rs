//! Default thresholds, weights, and half-lives for every subsystem.
//!
//! These are tuning defaults, not ground truth: each is overridable via
//! the corresponding config section.

// Policy engine.
pub const DEFAULT_BLOCK_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_REVIEW_CONFIDENCE: f64 = 0.6;

// Feed signal weights (sum to 1.0).
pub const DEFAULT_RELATIONSHIP_WEIGHT: f64 = 0.30;
pub const DEFAULT_TOPIC_WEIGHT: f64 = 0.25;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.20;
pub const DEFAULT_VALUE_WEIGHT: f64 = 0.15;
pub const DEFAULT_CONVERSATION_WEIGHT: f64 = 0.10;

// Feed shape parameters.
pub const DEFAULT_RECENCY_HALF_LIFE_HOURS: f64 = 24.0;
pub const DEFAULT_REVIEW_DAMPENING: f64 = 0.4;
pub const DEFAULT_CONVERSATION_SATURATION: f64 = 25.0;
pub const DEFAULT_TOPIC_OVERLAP_SATURATION: usize = 3;
pub const DEFAULT_NEUTRAL_VALUE: f64 = 0.5;

// Reputation component weights (sum to 1.0).
pub const DEFAULT_QUALITY_WEIGHT: f64 = 0.30;
pub const DEFAULT_VIOLATION_WEIGHT: f64 = 0.25;
pub const DEFAULT_ENGAGEMENT_WEIGHT: f64 = 0.20;
pub const DEFAULT_CONSISTENCY_WEIGHT: f64 = 0.15;
pub const DEFAULT_COMMUNITY_WEIGHT: f64 = 0.10;

// Reputation half-lives (days) — how fast each component forgets.
pub const DEFAULT_VIOLATION_HALF_LIFE_DAYS: f64 = 14.0;
pub const DEFAULT_QUALITY_HALF_LIFE_DAYS: f64 = 30.0;
pub const DEFAULT_ENGAGEMENT_HALF_LIFE_DAYS: f64 = 21.0;
pub const DEFAULT_CONSISTENCY_HALF_LIFE_DAYS: f64 = 28.0;
pub const DEFAULT_COMMUNITY_HALF_LIFE_DAYS: f64 = 45.0;

// Reputation event application.
pub const DEFAULT_EVENT_GAIN: f64 = 0.2;
pub const DEFAULT_VIOLATION_PENALTY: f64 = 0.25;
pub const DEFAULT_SEVERE_VIOLATION_PENALTY: f64 = 0.4;
pub const DEFAULT_CONSISTENCY_WINDOW_DAYS: f64 = 7.0;

// Tuning suggestion generator.
pub const DEFAULT_MIN_EVENTS: usize = 10;
pub const DEFAULT_LIKE_TOPIC_THRESHOLD: f64 = 3.0;
pub const DEFAULT_MUTE_REPEAT_THRESHOLD: u32 = 2;
pub const DEFAULT_IGNORE_RATIO_THRESHOLD: f64 = 0.8;
pub const DEFAULT_IGNORE_MIN_VOLUME: u32 = 5;
pub const DEFAULT_FOLLOW_STEP_UP_SHARE: f64 = 0.6;
pub const DEFAULT_FOLLOW_STEP_DOWN_SHARE: f64 = 0.2;
pub const DEFAULT_COMMENT_SHARE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CONFIDENCE_SATURATION_EVENTS: usize = 50;
