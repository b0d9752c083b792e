pub mod base;
pub mod claim;
pub mod fact_check;
pub mod status;
pub mod value;

pub use base::{Chirp, DiscussionRole};
pub use claim::{Claim, ClaimDomain, ClaimType, RiskLevel};
pub use fact_check::{Evidence, FactCheck, Verdict};
pub use status::FactCheckStatus;
pub use value::ValueScore;
