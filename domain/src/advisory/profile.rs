//! Advisor profile value object

use super::domain::AdvisoryDomain;
use serde::{Deserialize, Serialize};

/// The account on whose behalf the council deliberates
///
/// Only `tier` feeds the arithmetic (via the social cost factor); the name
/// is embedded in the shared round context and the synthesizer instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorProfile {
    pub name: String,
    /// Account tier, 1 (basic) to 4 (highest)
    pub tier: u8,
    /// Domains this advisor usually consults on
    pub domains: Vec<AdvisoryDomain>,
}

impl AdvisorProfile {
    pub fn new(name: impl Into<String>, tier: u8) -> Self {
        Self {
            name: name.into(),
            tier,
            ..Default::default()
        }
    }

    /// Multiplier applied to the social cost factor; unknown tiers get 1.0.
    pub fn tier_multiplier(&self) -> f64 {
        tier_multiplier(self.tier)
    }
}

impl Default for AdvisorProfile {
    fn default() -> Self {
        Self {
            name: "Sovereign".to_string(),
            tier: 4,
            domains: vec![
                AdvisoryDomain::Wealth,
                AdvisoryDomain::Health,
                AdvisoryDomain::Longevity,
            ],
        }
    }
}

/// Tier lookup table: 1 → 1.0, 2 → 0.85, 3 → 0.70, 4 → 0.55.
pub fn tier_multiplier(tier: u8) -> f64 {
    match tier {
        1 => 1.0,
        2 => 0.85,
        3 => 0.70,
        4 => 0.55,
        _ => 1.0,
    }
}
