use chrono::{DateTime, Utc};

use kurral_core::chirp::Chirp;

/// Recency signal: `e^(-ageHours / halfLife)`.
///
/// Range: 0.0 – 1.0. Older chirps fade monotonically; a chirp from the
/// future (clock skew) scores as brand new.
pub fn calculate(chirp: &Chirp, now: DateTime<Utc>, half_life_hours: f64) -> f64 {
    (-chirp.age_hours(now) / half_life_hours).exp()
}
