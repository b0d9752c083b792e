pub mod scorer;

pub use scorer::{SignalBreakdown, SignalWeights};
