//! Check orchestration.
//!
//! - [`verifier`] - runs every check in order and collects outcomes
//! - [`report`] - the aggregate result and its summary section

pub mod report;
pub mod verifier;

pub use report::VerificationReport;
pub use verifier::Verifier;
