//! Response envelope - the complete result of one council request.
//!
//! Consumed by whatever transport sits in front of the council (CLI, HTTP).

use crate::advisory::{AdvisoryDomain, LineageWeights};
use crate::classifier::{Classification, EfficiencyScore, RestDecision, UrgencyClass};
use crate::fusion::FusionResult;
use crate::landscape::ProbabilityLandscape;
use crate::lineage::{LineageResponses, RoundRecord};
use crate::proof::ProofStamp;
use serde::{Deserialize, Serialize};

/// Message returned when inference is skipped
pub const DEFERRED_MESSAGE: &str = "Inference deferred: rest mode active.";

/// Urgency as shown to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyRecord {
    pub class: UrgencyClass,
    pub color: String,
    pub weight: f64,
    pub label: String,
}

impl From<UrgencyClass> for UrgencyRecord {
    fn from(class: UrgencyClass) -> Self {
        Self {
            class,
            color: class.color().to_string(),
            weight: class.weight(),
            label: class.label().to_string(),
        }
    }
}

/// One-line summaries of each stage, for audit logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// The efficiency equation string
    pub efficiency: String,
    /// `RESTING` or `ACTIVE`
    pub rest: String,
    /// `<MODE> (<n> rounds)`
    pub deliberation: String,
    /// Short proof-stamp form, absent when inference was deferred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<String>,
}

/// Outputs that only exist when at least one round ran
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliberation {
    /// Every completed round, the last one being the fusion input
    pub rounds: Vec<RoundRecord>,
    pub final_responses: LineageResponses,
    pub fusion: FusionResult,
    pub landscape: ProbabilityLandscape,
    pub proof: ProofStamp,
    /// Further rounds were abandoned because the deadline passed or the
    /// request was cancelled
    pub cut_short: bool,
}

/// Complete result of a council request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouncilVerdict {
    pub query: String,
    pub domain: AdvisoryDomain,
    pub urgency: UrgencyRecord,
    pub efficiency: EfficiencyScore,
    pub rest: RestDecision,
    pub scf: f64,
    /// Rounds actually executed
    pub rounds_completed: u8,
    pub weights_applied: LineageWeights,
    /// `true` when inference was skipped and no lineage was called
    pub inference_deferred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliberation: Option<Deliberation>,
    pub audit: AuditSummary,
}

impl CouncilVerdict {
    /// Envelope for a request whose plan skipped inference.
    pub fn deferred(
        query: impl Into<String>,
        domain: AdvisoryDomain,
        classification: Classification,
    ) -> Self {
        let audit = Self::audit(&classification, 0, None);
        Self {
            query: query.into(),
            domain,
            urgency: classification.urgency.into(),
            efficiency: classification.efficiency,
            rest: classification.rest,
            scf: classification.scf,
            rounds_completed: 0,
            weights_applied: domain.weights(),
            inference_deferred: true,
            message: Some(DEFERRED_MESSAGE.to_string()),
            deliberation: None,
            audit,
        }
    }

    /// Envelope for a request that ran at least one round.
    pub fn deliberated(
        query: impl Into<String>,
        domain: AdvisoryDomain,
        classification: Classification,
        deliberation: Deliberation,
    ) -> Self {
        let rounds_completed = deliberation.rounds.len() as u8;
        let audit = Self::audit(
            &classification,
            rounds_completed,
            Some(deliberation.proof.short.clone()),
        );
        Self {
            query: query.into(),
            domain,
            urgency: classification.urgency.into(),
            efficiency: classification.efficiency,
            rest: classification.rest,
            scf: classification.scf,
            rounds_completed,
            weights_applied: domain.weights(),
            inference_deferred: false,
            message: None,
            deliberation: Some(deliberation),
            audit,
        }
    }

    fn audit(classification: &Classification, rounds: u8, proof: Option<String>) -> AuditSummary {
        AuditSummary {
            efficiency: classification.efficiency.equation.clone(),
            rest: classification.rest.status().to_string(),
            deliberation: format!("{} ({} rounds)", classification.efficiency.mode, rounds),
            proof,
        }
    }

    /// The fused result, when any round ran
    pub fn fusion(&self) -> Option<&FusionResult> {
        self.deliberation.as_ref().map(|d| &d.fusion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LoadSignals;
    use crate::fusion::{FusionAssessment, INSUFFICIENT_VERDICT};

    fn classify(query: &str, load: f64) -> Classification {
        Classification::classify(&LoadSignals {
            query,
            urgency_override: None,
            load,
            price: 0.14,
            tier: 4,
            domain: AdvisoryDomain::General,
        })
    }

    #[test]
    fn test_deferred_envelope() {
        let verdict = CouncilVerdict::deferred("bonds?", AdvisoryDomain::General, classify("bonds?", 0.9));

        assert!(verdict.inference_deferred);
        assert_eq!(verdict.rounds_completed, 0);
        assert!(verdict.fusion().is_none());
        assert_eq!(verdict.audit.rest, "RESTING");
        assert!(verdict.audit.proof.is_none());
        assert_eq!(verdict.message.as_deref(), Some(DEFERRED_MESSAGE));

        let json = serde_json::to_value(&verdict).unwrap();
        assert!(json.get("deliberation").is_none());
        assert_eq!(json["urgency"]["color"], "BLUE");
    }

    #[test]
    fn test_deliberated_envelope_counts_rounds() {
        let responses = LineageResponses::all_failed("offline");
        let fusion = FusionResult::new(
            FusionAssessment::assess(&responses, &AdvisoryDomain::General.weights(), 1.0),
            INSUFFICIENT_VERDICT,
        );
        let deliberation = Deliberation {
            rounds: vec![
                RoundRecord { round: 1, responses: responses.clone() },
                RoundRecord { round: 2, responses: responses.clone() },
            ],
            final_responses: responses.clone(),
            proof: ProofStamp::issue_at(&responses, fusion.status, 1_000),
            landscape: ProbabilityLandscape::assign(&["Proceed".to_string()], &mut rand::thread_rng()),
            fusion,
            cut_short: false,
        };

        let verdict = CouncilVerdict::deliberated(
            "emergency",
            AdvisoryDomain::General,
            classify("emergency", 0.9),
            deliberation,
        );

        assert!(!verdict.inference_deferred);
        assert_eq!(verdict.rounds_completed, 2);
        assert!(verdict.audit.deliberation.ends_with("(2 rounds)"));
        assert!(verdict.audit.proof.is_some());
    }
}
