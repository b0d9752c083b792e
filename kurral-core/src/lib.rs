//! # kurral-core
//!
//! Foundation crate for the Kurral feed engines.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod chirp;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod score;
pub mod traits;
pub mod user;

// Re-export the most commonly used types at the crate root.
pub use chirp::{Chirp, Claim, ClaimDomain, FactCheck, FactCheckStatus, Verdict};
pub use config::{ForYouConfig, KurralConfig};
pub use errors::{KurralError, KurralResult};
pub use score::UnitScore;
pub use user::{KurralScore, User};
