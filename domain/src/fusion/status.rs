//! Fusion status

use serde::{Deserialize, Serialize};

/// How strongly the lineages converged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FusionStatus {
    /// All four active and confidence above 0.92
    Unified,
    /// At least three active and confidence above 0.80
    Consensus,
    /// At least two active
    Partial,
    /// Fewer than two active
    Insufficient,
}

impl FusionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FusionStatus::Unified => "UNIFIED",
            FusionStatus::Consensus => "CONSENSUS",
            FusionStatus::Partial => "PARTIAL",
            FusionStatus::Insufficient => "INSUFFICIENT",
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, FusionStatus::Insufficient)
    }
}

impl std::fmt::Display for FusionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
