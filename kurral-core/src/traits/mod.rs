pub mod feed;
pub mod policy;
pub mod trust;
pub mod tuning;

pub use feed::IFeedRanker;
pub use policy::IPolicyEngine;
pub use trust::ITrustEngine;
pub use tuning::ITuner;
