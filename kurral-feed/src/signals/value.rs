use kurral_core::chirp::Chirp;

/// Value signal: the chirp's total value score when present.
///
/// Unscored chirps contribute `neutral` (0.5 by default), not zero —
/// content the value pipeline hasn't reached yet must not be penalized
/// for it.
pub fn calculate(chirp: &Chirp, neutral: f64) -> f64 {
    chirp
        .value_score
        .map(|v| v.total.value())
        .unwrap_or(neutral)
}
