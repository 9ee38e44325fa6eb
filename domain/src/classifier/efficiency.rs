//! Social cost factor and efficiency score
//!
//! `Me = U / (L × P_norm × SCF)` decides how much deliberation a request
//! earns under the current external load.

use crate::advisory::{AdvisoryDomain, tier_multiplier};
use crate::util::round_to;
use serde::{Deserialize, Serialize};

/// Price at which the normalized price signal saturates at 1.0
pub const PRICE_CEILING: f64 = 0.30;

/// Floor for the efficiency denominator
const MIN_DENOMINATOR: f64 = 0.001;

/// Compute the social cost factor for a request.
///
/// `SCF = (1 − 0.6U) × tier × domain`, clamped to `[0.1, 1.0]`.
pub fn social_cost_factor(urgency_weight: f64, tier: u8, domain: AdvisoryDomain) -> f64 {
    let scf = (1.0 - urgency_weight * 0.6) * tier_multiplier(tier) * domain.cost_multiplier();
    scf.clamp(0.1, 1.0)
}

/// Deliberation mode selected by the efficiency score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InferenceMode {
    /// Me ≥ 2.0: three refinement rounds
    IterativeTriangulation,
    /// 0.8 ≤ Me < 2.0: two rounds
    WeightedSynthesis,
    /// Me < 0.8: skip inference
    ElasticSabbath,
}

impl InferenceMode {
    pub fn from_score(me: f64) -> Self {
        if me >= 2.0 {
            InferenceMode::IterativeTriangulation
        } else if me >= 0.8 {
            InferenceMode::WeightedSynthesis
        } else {
            InferenceMode::ElasticSabbath
        }
    }

    /// Rounds this mode asks for before any rest adjustment.
    pub fn rounds(&self) -> u8 {
        match self {
            InferenceMode::IterativeTriangulation => 3,
            InferenceMode::WeightedSynthesis => 2,
            InferenceMode::ElasticSabbath => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceMode::IterativeTriangulation => "ITERATIVE_TRIANGULATION",
            InferenceMode::WeightedSynthesis => "WEIGHTED_SYNTHESIS",
            InferenceMode::ElasticSabbath => "ELASTIC_SABBATH",
        }
    }
}

impl std::fmt::Display for InferenceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Efficiency score record
///
/// Displayed values are rounded to four decimals; `mode` and `rounds` are
/// derived from the unrounded score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyScore {
    /// The score Me
    pub me: f64,
    /// Urgency weight U
    pub urgency: f64,
    /// External load L
    pub load: f64,
    /// Raw price P
    pub price: f64,
    pub price_normalized: f64,
    pub scf: f64,
    pub mode: InferenceMode,
    pub rounds: u8,
    /// Human-readable form of the computation
    pub equation: String,
}

impl EfficiencyScore {
    pub fn compute(urgency: f64, load: f64, price: f64, scf: f64) -> Self {
        let price_normalized = (price / PRICE_CEILING).min(1.0);
        let denominator = (load * price_normalized * scf).max(MIN_DENOMINATOR);
        let me = urgency / denominator;
        let mode = InferenceMode::from_score(me);

        Self {
            me: round_to(me, 4),
            urgency,
            load,
            price,
            price_normalized: round_to(price_normalized, 4),
            scf: round_to(scf, 4),
            mode,
            rounds: mode.rounds(),
            equation: format!(
                "Me={:?}/({:.3}x{:.3}x{:.3})={:.4}",
                urgency, load, price_normalized, scf, me
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scf_formula() {
        // (1 - 0.6) * 0.55 * 0.85
        let scf = social_cost_factor(1.0, 4, AdvisoryDomain::Wealth);
        assert!((scf - 0.187).abs() < 1e-9);
    }

    #[test]
    fn test_scf_clamped() {
        assert_eq!(social_cost_factor(0.0, 1, AdvisoryDomain::General), 1.0);
        // out-of-range weight drives the raw factor below the floor
        assert_eq!(social_cost_factor(1.5, 4, AdvisoryDomain::Health), 0.1);
    }

    #[test]
    fn test_mode_thresholds() {
        assert_eq!(InferenceMode::from_score(2.0), InferenceMode::IterativeTriangulation);
        assert_eq!(InferenceMode::from_score(1.999), InferenceMode::WeightedSynthesis);
        assert_eq!(InferenceMode::from_score(0.8), InferenceMode::WeightedSynthesis);
        assert_eq!(InferenceMode::from_score(0.7999), InferenceMode::ElasticSabbath);
        assert_eq!(InferenceMode::IterativeTriangulation.rounds(), 3);
        assert_eq!(InferenceMode::WeightedSynthesis.rounds(), 2);
        assert_eq!(InferenceMode::ElasticSabbath.rounds(), 0);
    }

    #[test]
    fn test_mode_is_pure_function_of_score() {
        for &(load, price, scf) in &[(0.9, 0.3, 1.0), (0.2, 0.05, 0.3), (0.5, 0.2, 0.6)] {
            let a = EfficiencyScore::compute(0.5, load, price, scf);
            let b = EfficiencyScore::compute(0.5, load, price, scf);
            assert_eq!(a, b);
            assert_eq!(a.rounds, a.mode.rounds());
        }
    }

    #[test]
    fn test_price_normalization_caps_at_one() {
        let score = EfficiencyScore::compute(0.25, 1.0, 0.90, 1.0);
        assert_eq!(score.price_normalized, 1.0);
        assert_eq!(score.me, 0.25);
        assert_eq!(score.mode, InferenceMode::ElasticSabbath);
    }

    #[test]
    fn test_zero_denominator_is_floored() {
        let score = EfficiencyScore::compute(0.5, 0.0, 0.1, 0.5);
        assert_eq!(score.me, 500.0);
        assert_eq!(score.mode, InferenceMode::IterativeTriangulation);
    }

    #[test]
    fn test_equation_string() {
        let score = EfficiencyScore::compute(1.0, 0.85, 0.14, 0.187);
        assert!(score.equation.starts_with("Me=1.0/(0.850x0.467x0.187)="));
    }
}
