use kurral_core::config::HalfLives;
use kurral_core::score::UnitScore;
use kurral_core::user::TrustComponents;

/// Pull a value toward its baseline by `e^(-elapsedDays / halfLife)`.
///
/// At elapsed = 0 the value is unchanged; as elapsed grows the distance
/// to the baseline shrinks monotonically, never overshooting.
pub fn decay_toward(current: f64, baseline: f64, elapsed_days: f64, half_life_days: f64) -> f64 {
    let factor = (-elapsed_days.max(0.0) / half_life_days).exp();
    baseline + (current - baseline) * factor
}

/// Fold a new observation into a running aggregate.
/// `gain` is the EMA coefficient: 0 ignores the observation, 1 replaces
/// the aggregate with it.
pub fn fold_observation(current: f64, observation: f64, gain: f64) -> f64 {
    current + gain * (observation - current)
}

/// Decay all five components toward their baselines for `elapsed_days`.
pub fn decay_components(
    components: &TrustComponents,
    elapsed_days: f64,
    half_lives: &HalfLives,
) -> TrustComponents {
    let baseline = TrustComponents::baseline();
    TrustComponents {
        quality_history: UnitScore::new(decay_toward(
            components.quality_history.value(),
            baseline.quality_history.value(),
            elapsed_days,
            half_lives.quality,
        )),
        violation_history: UnitScore::new(decay_toward(
            components.violation_history.value(),
            baseline.violation_history.value(),
            elapsed_days,
            half_lives.violation,
        )),
        engagement_quality: UnitScore::new(decay_toward(
            components.engagement_quality.value(),
            baseline.engagement_quality.value(),
            elapsed_days,
            half_lives.engagement,
        )),
        consistency: UnitScore::new(decay_toward(
            components.consistency.value(),
            baseline.consistency.value(),
            elapsed_days,
            half_lives.consistency,
        )),
        community_trust: UnitScore::new(decay_toward(
            components.community_trust.value(),
            baseline.community_trust.value(),
            elapsed_days,
            half_lives.community,
        )),
    }
}
