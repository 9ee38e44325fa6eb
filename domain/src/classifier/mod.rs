//! Urgency & load classifier
//!
//! Turns a free-text request plus an external load/price reading into the
//! decision of how much deliberation the request gets.
//!
//! ```text
//! query ──► UrgencyClass (U) ─┬─► SCF(U, tier, domain) ─► EfficiencyScore(U, L, P, SCF) ─┐
//!                             │                                                          ├─► RoundPlan
//! load  ──────────────────────┴─► RestDecision(L) ───────────────────────────────────────┘
//! ```

pub mod efficiency;
pub mod plan;
pub mod rest;
pub mod urgency;

pub use efficiency::{EfficiencyScore, InferenceMode, social_cost_factor};
pub use plan::{MAX_ROUNDS, RoundPlan, SkipReason};
pub use rest::{REST_CONSTANT, REST_LOAD_THRESHOLD, RestDecision};
pub use urgency::UrgencyClass;

use crate::advisory::AdvisoryDomain;
use serde::{Deserialize, Serialize};

/// Inputs to the classifier for one request
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSignals<'a> {
    pub query: &'a str,
    /// Explicit urgency token; bypasses the keyword scan when present
    pub urgency_override: Option<&'a str>,
    /// External load in [0, 1]
    pub load: f64,
    /// External price, ≥ 0
    pub price: f64,
    pub tier: u8,
    pub domain: AdvisoryDomain,
}

/// Everything the classifier decided about one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub urgency: UrgencyClass,
    pub scf: f64,
    pub efficiency: EfficiencyScore,
    pub rest: RestDecision,
    pub plan: RoundPlan,
}

impl Classification {
    pub fn classify(signals: &LoadSignals<'_>) -> Self {
        let urgency = UrgencyClass::resolve(signals.urgency_override, signals.query);
        let u = urgency.weight();
        let scf = social_cost_factor(u, signals.tier, signals.domain);
        let efficiency = EfficiencyScore::compute(u, signals.load, signals.price, scf);
        let rest = RestDecision::check(signals.load);
        let plan = RoundPlan::decide(urgency, &efficiency, &rest);

        Self {
            urgency,
            scf,
            efficiency,
            rest,
            plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals<'a>(query: &'a str, load: f64, price: f64, domain: AdvisoryDomain) -> LoadSignals<'a> {
        LoadSignals {
            query,
            urgency_override: None,
            load,
            price,
            tier: 4,
            domain,
        }
    }

    #[test]
    fn test_override_under_rest_runs_two_rounds() {
        let c = Classification::classify(&signals(
            "emergency: portfolio crashed",
            0.85,
            0.14,
            AdvisoryDomain::Wealth,
        ));

        assert_eq!(c.urgency, UrgencyClass::Override);
        assert_eq!(c.urgency.weight(), 1.0);
        assert!(c.rest.active);
        assert_eq!(c.efficiency.mode, InferenceMode::IterativeTriangulation);
        assert_eq!(c.plan.rounds, 2);
        assert!(!c.plan.is_skipped());
    }

    #[test]
    fn test_elevated_low_load_follows_thresholds() {
        let c = Classification::classify(&signals(
            "should I rebalance",
            0.30,
            0.10,
            AdvisoryDomain::General,
        ));

        assert_eq!(c.urgency, UrgencyClass::Elevated);
        // SCF = 0.7 * 0.55; Me = 0.5 / (0.3 * (0.1 / 0.3) * 0.385)
        assert!((c.scf - 0.385).abs() < 1e-9);
        assert!((c.efficiency.me - 12.987).abs() < 1e-3);
        assert_eq!(c.efficiency.mode, InferenceMode::IterativeTriangulation);
        assert!(!c.rest.active);
        assert_eq!(c.plan.rounds, 3);
    }

    #[test]
    fn test_routine_under_rest_is_skipped() {
        let c = Classification::classify(&signals("tell me about bonds", 0.9, 0.2, AdvisoryDomain::General));
        assert_eq!(c.urgency, UrgencyClass::Routine);
        assert!(c.plan.is_skipped());
        assert_eq!(c.plan.skipped, Some(SkipReason::Resting));
    }

    #[test]
    fn test_override_token_ignores_text() {
        let mut s = signals("emergency", 0.3, 0.1, AdvisoryDomain::General);
        s.urgency_override = Some("routine");
        let c = Classification::classify(&s);
        assert_eq!(c.urgency, UrgencyClass::Routine);
    }
}
