//! Advisory domain tag and its fixed lookup tables

use crate::lineage::Lineage;
use serde::{Deserialize, Serialize};

/// Subject area a request belongs to (Value Object)
///
/// Selects the lineage role instructions, the lineage weights used by
/// fusion, and the domain multiplier of the social cost factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryDomain {
    Wealth,
    Health,
    Longevity,
    #[default]
    General,
}

impl AdvisoryDomain {
    pub const ALL: [AdvisoryDomain; 4] = [
        AdvisoryDomain::Wealth,
        AdvisoryDomain::Health,
        AdvisoryDomain::Longevity,
        AdvisoryDomain::General,
    ];

    /// Resolve a free-form tag; unknown tags fall back to `General`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "wealth" => AdvisoryDomain::Wealth,
            "health" => AdvisoryDomain::Health,
            "longevity" => AdvisoryDomain::Longevity,
            _ => AdvisoryDomain::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryDomain::Wealth => "wealth",
            AdvisoryDomain::Health => "health",
            AdvisoryDomain::Longevity => "longevity",
            AdvisoryDomain::General => "general",
        }
    }

    /// Multiplier applied to the social cost factor.
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            AdvisoryDomain::Health => 0.70,
            AdvisoryDomain::Longevity => 0.75,
            AdvisoryDomain::Wealth => 0.85,
            AdvisoryDomain::General => 1.0,
        }
    }

    /// Fusion weights for this domain.
    pub fn weights(&self) -> LineageWeights {
        let [alethea, sophia, eirene, kairos] = match self {
            AdvisoryDomain::Wealth => [0.30, 0.25, 0.25, 0.20],
            AdvisoryDomain::Health => [0.35, 0.25, 0.20, 0.20],
            AdvisoryDomain::Longevity => [0.25, 0.25, 0.20, 0.30],
            AdvisoryDomain::General => [0.25, 0.25, 0.25, 0.25],
        };
        LineageWeights {
            alethea,
            sophia,
            eirene,
            kairos,
        }
    }

    /// System instruction for a lineage within this domain.
    pub fn role(&self, lineage: Lineage) -> &'static str {
        use AdvisoryDomain::*;
        use Lineage::*;

        match (self, lineage) {
            (Wealth, Alethea) => {
                "You are Alethea, quantitative financial analyst. Use data, metrics, Sharpe ratios and DCF. Focus on a retirement-stage portfolio."
            }
            (Wealth, Sophia) => {
                "You are Sophia, macro market strategist. Analyze geopolitical context, central bank policy and sector rotation for the current holdings."
            }
            (Wealth, Eirene) => {
                "You are Eirene, risk analyst. Identify downside risks, black swans and concentration issues in the portfolio."
            }
            (Wealth, Kairos) => {
                "You are Kairos, wealth philosopher. Focus on legacy, tax efficiency and required minimum distribution planning."
            }
            (Health, Alethea) => {
                "You are Alethea, diagnostician. Interpret lab values for a healthy older adult."
            }
            (Health, Sophia) => {
                "You are Sophia, clinical researcher. Provide evidence-based medicine and clinical guidelines."
            }
            (Health, Eirene) => {
                "You are Eirene, integrative medicine specialist. Identify root causes and functional medicine perspectives."
            }
            (Health, Kairos) => {
                "You are Kairos, patient advocate. Focus on informed consent and questions to ask physicians."
            }
            (Longevity, Alethea) => {
                "You are Alethea, longevity scientist. Analyze hallmarks of aging, NAD+, senolytics, mTOR and AMPK."
            }
            (Longevity, Sophia) => {
                "You are Sophia, clinical nutritionist. Focus on fasting research and phytochemical optimization."
            }
            (Longevity, Eirene) => {
                "You are Eirene, exercise physiologist. Analyze Zone 2 cardio and resistance training for older adults."
            }
            (Longevity, Kairos) => {
                "You are Kairos, wellness integrator. Focus on sleep, stress, purpose and holistic longevity."
            }
            (General, Alethea) => {
                "You are Alethea, analytical expert. Provide data-driven logical analysis."
            }
            (General, Sophia) => {
                "You are Sophia, creative synthesizer. Provide broader context and creative perspectives."
            }
            (General, Eirene) => {
                "You are Eirene, contrarian analyst. Identify risks and what others miss."
            }
            (General, Kairos) => {
                "You are Kairos, ethical philosopher. Provide wisdom and long-term thinking."
            }
        }
    }
}

impl std::fmt::Display for AdvisoryDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-lineage fusion weights for one domain
///
/// Weights need not sum to 1, although every built-in table does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineageWeights {
    pub alethea: f64,
    pub sophia: f64,
    pub eirene: f64,
    pub kairos: f64,
}

impl LineageWeights {
    pub fn get(&self, lineage: Lineage) -> f64 {
        match lineage {
            Lineage::Alethea => self.alethea,
            Lineage::Sophia => self.sophia,
            Lineage::Eirene => self.eirene,
            Lineage::Kairos => self.kairos,
        }
    }

    /// Sum of the weights of the given lineages.
    pub fn sum_of(&self, lineages: &[Lineage]) -> f64 {
        lineages.iter().map(|l| self.get(*l)).sum()
    }
}

impl Default for LineageWeights {
    fn default() -> Self {
        AdvisoryDomain::General.weights()
    }
}
