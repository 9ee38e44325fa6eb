//! Lineage value object representing one advisory backend

use serde::{Deserialize, Serialize};

/// The four independent advisory lineages that make up the council (Value Object)
///
/// Each lineage is backed by a different provider and plays a fixed role
/// within every advisory domain (see [`AdvisoryDomain::role`]).
///
/// [`AdvisoryDomain::role`]: crate::advisory::AdvisoryDomain::role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lineage {
    /// Quantitative / analytical lineage
    Alethea,
    /// Macro / contextual lineage
    Sophia,
    /// Risk / contrarian lineage
    Eirene,
    /// Integrative lineage, also the designated verdict synthesizer
    Kairos,
}

impl Lineage {
    /// All lineages in their canonical order
    pub const ALL: [Lineage; 4] = [
        Lineage::Alethea,
        Lineage::Sophia,
        Lineage::Eirene,
        Lineage::Kairos,
    ];

    /// Number of lineages in a full council
    pub const COUNT: usize = Self::ALL.len();

    /// Stable lowercase identifier used in config files and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Lineage::Alethea => "alethea",
            Lineage::Sophia => "sophia",
            Lineage::Eirene => "eirene",
            Lineage::Kairos => "kairos",
        }
    }

    /// Capitalized name used in failure markers and prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            Lineage::Alethea => "Alethea",
            Lineage::Sophia => "Sophia",
            Lineage::Eirene => "Eirene",
            Lineage::Kairos => "Kairos",
        }
    }

    /// The lineage that writes the unified verdict
    pub fn synthesizer() -> Self {
        Lineage::Kairos
    }
}

impl std::fmt::Display for Lineage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Lineage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alethea" => Ok(Lineage::Alethea),
            "sophia" => Ok(Lineage::Sophia),
            "eirene" => Ok(Lineage::Eirene),
            "kairos" => Ok(Lineage::Kairos),
            other => Err(format!("unknown lineage: {}", other)),
        }
    }
}
