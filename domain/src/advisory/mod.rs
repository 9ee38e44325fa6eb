//! Advisory domain
//!
//! Static configuration tables keyed by subject area, plus the advisor profile.

pub mod domain;
pub mod profile;

pub use domain::{AdvisoryDomain, LineageWeights};
pub use profile::{AdvisorProfile, tier_multiplier};
