use kurral_core::chirp::FactCheckStatus;

/// Policy dampening factor applied multiplicatively to the aggregate
/// score. `needs_review` chirps stay visible but down-weighted;
/// `blocked` chirps never reach scoring (hard-filtered by the engine),
/// so the 0.0 here is a backstop.
pub fn factor(status: FactCheckStatus, review_dampening: f64) -> f64 {
    match status {
        FactCheckStatus::Clean => 1.0,
        FactCheckStatus::NeedsReview => review_dampening,
        FactCheckStatus::Blocked => 0.0,
    }
}
