//! Round planning - combines efficiency mode and rest state into a round count

use super::efficiency::{EfficiencyScore, InferenceMode};
use super::rest::RestDecision;
use super::urgency::UrgencyClass;
use serde::{Deserialize, Serialize};

/// Largest number of refinement rounds any plan can ask for
pub const MAX_ROUNDS: u8 = 3;

/// Why a plan skips inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// External load is at or above the rest threshold
    Resting,
    /// Efficiency score fell into the sabbath band
    LowEfficiency,
}

/// Number of rounds the orchestrator will run for one request
///
/// Decided once, before the first round, and never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlan {
    /// Target round count in `0..=3`
    pub rounds: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

impl RoundPlan {
    /// Decide the round count.
    ///
    /// - `OVERRIDE` always runs: `max(1, mode − 1)` while resting, else `max(1, mode)`.
    /// - Any other class runs nothing while resting or in the sabbath band,
    ///   otherwise the mode's round count.
    pub fn decide(urgency: UrgencyClass, score: &EfficiencyScore, rest: &RestDecision) -> Self {
        let mode_rounds = score.mode.rounds();

        if urgency.is_override() {
            let rounds = if rest.active {
                mode_rounds.saturating_sub(1).max(1)
            } else {
                mode_rounds.max(1)
            };
            return Self::run(rounds);
        }

        if rest.active {
            return Self::skip(SkipReason::Resting);
        }
        if score.mode == InferenceMode::ElasticSabbath {
            return Self::skip(SkipReason::LowEfficiency);
        }
        Self::run(mode_rounds)
    }

    fn run(rounds: u8) -> Self {
        Self {
            rounds: rounds.min(MAX_ROUNDS),
            skipped: None,
        }
    }

    fn skip(reason: SkipReason) -> Self {
        Self {
            rounds: 0,
            skipped: Some(reason),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.rounds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Score whose mode asks for `rounds` rounds (price saturated, SCF 1.0).
    fn score(rounds: u8) -> EfficiencyScore {
        let (urgency, load) = match rounds {
            3 => (1.0, 0.25), // Me = 4.0
            2 => (0.5, 0.5),  // Me = 1.0
            _ => (0.25, 1.0), // Me = 0.25
        };
        EfficiencyScore::compute(urgency, load, 0.30, 1.0)
    }

    #[test]
    fn test_fixture_bands() {
        assert_eq!(score(3).rounds, 3);
        assert_eq!(score(2).rounds, 2);
        assert_eq!(score(0).rounds, 0);
    }

    #[test]
    fn test_rest_forces_zero_for_non_override() {
        let rest = RestDecision::check(0.85);
        for urgency in [
            UrgencyClass::Critical,
            UrgencyClass::Elevated,
            UrgencyClass::Routine,
        ] {
            for rounds in [0, 2, 3] {
                let plan = RoundPlan::decide(urgency, &score(rounds), &rest);
                assert_eq!(plan.rounds, 0);
                assert_eq!(plan.skipped, Some(SkipReason::Resting));
            }
        }
    }

    #[test]
    fn test_override_always_runs() {
        let resting = RestDecision::check(0.95);
        let idle = RestDecision::check(0.10);

        assert_eq!(RoundPlan::decide(UrgencyClass::Override, &score(3), &resting).rounds, 2);
        assert_eq!(RoundPlan::decide(UrgencyClass::Override, &score(2), &resting).rounds, 1);
        assert_eq!(RoundPlan::decide(UrgencyClass::Override, &score(0), &resting).rounds, 1);
        assert_eq!(RoundPlan::decide(UrgencyClass::Override, &score(3), &idle).rounds, 3);
        assert_eq!(RoundPlan::decide(UrgencyClass::Override, &score(0), &idle).rounds, 1);
    }

    #[test]
    fn test_sabbath_band_skips_without_rest() {
        let idle = RestDecision::check(0.10);
        let plan = RoundPlan::decide(UrgencyClass::Elevated, &score(0), &idle);
        assert!(plan.is_skipped());
        assert_eq!(plan.skipped, Some(SkipReason::LowEfficiency));

        let plan = RoundPlan::decide(UrgencyClass::Elevated, &score(2), &idle);
        assert_eq!(plan.rounds, 2);
        assert!(plan.skipped.is_none());
    }
}
