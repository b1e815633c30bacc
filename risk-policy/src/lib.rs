//! Risk Policy for PayRisk
//!
//! Threshold-based payment decisioning over an external scoring provider

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod provider;
pub mod stub;
pub mod policy;

pub use error::{Error, Result};
pub use types::*;
pub use provider::ScoreProvider;
pub use stub::{StubScoreConfig, StubScoreProvider};
pub use policy::{decide, RiskPolicy};

/// Score at or above which a payment is approved
pub const APPROVE_THRESHOLD: u8 = 85;

/// Score at or above which a payment is sent to manual review
pub const REVIEW_THRESHOLD: u8 = 70;
