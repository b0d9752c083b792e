use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Score clamped to [0.0, 1.0].
/// Used for fact-check confidence, chirp value scores, and trust components.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct UnitScore(f64);

impl UnitScore {
    /// High threshold — scores above this count as strong signals
    /// (e.g. a chirp whose value qualifies as a quality contribution).
    pub const HIGH: f64 = 0.7;
    /// Neutral midpoint. Absent optional scores contribute this value.
    pub const NEUTRAL: f64 = 0.5;
    /// Low threshold — scores below this are treated as weak evidence.
    pub const LOW: f64 = 0.3;

    /// Create a new UnitScore, clamping to [0.0, 1.0].
    /// NaN is mapped to 0.0 (the most cautious interpretation).
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if the score is above the high threshold.
    pub fn is_high(self) -> bool {
        self.0 >= Self::HIGH
    }

    /// Check if the score is below the low threshold.
    pub fn is_low(self) -> bool {
        self.0 < Self::LOW
    }
}

impl Default for UnitScore {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for UnitScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<UnitScore> for f64 {
    fn from(s: UnitScore) -> Self {
        s.0
    }
}

impl Add for UnitScore {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for UnitScore {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for UnitScore {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
