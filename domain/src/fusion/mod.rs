//! Fusion domain
//!
//! Pure arithmetic that turns the final round's responses into a status and
//! confidence. The verdict text itself comes from an external synthesizer
//! call, made by the application layer.

mod status;

pub use status::FusionStatus;

use crate::advisory::LineageWeights;
use crate::lineage::{Lineage, LineageResponses};
use crate::util::round_to;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Verdict used when no lineage answered
pub const INSUFFICIENT_VERDICT: &str = "Insufficient lineage data for a unified verdict.";

/// Marker words and the agreement tag each one contributes
const AGREEMENT_MARKERS: [(&str, &str); 3] = [
    ("risk", "Risk convergent"),
    ("recommend", "Recommendations converging"),
    ("opportunity", "Opportunity identified"),
];

/// Verdict used when the synthesizer call fails
pub fn fallback_verdict(confidence: f64) -> String {
    format!(
        "Consensus reached at {:.1}% confidence. See individual lineage responses for full analysis.",
        confidence * 100.0
    )
}

/// Status and confidence derived from the final round (no verdict yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionAssessment {
    pub status: FusionStatus,
    /// Unrounded confidence in [0, 0.99]
    pub confidence: f64,
    pub agreements: Vec<String>,
    pub active_count: usize,
    pub weights_applied: BTreeMap<Lineage, f64>,
}

impl FusionAssessment {
    /// Score the final round.
    ///
    /// `efficiency` is the request's Me; its contribution saturates at Me = 3.
    pub fn assess(responses: &LineageResponses, weights: &LineageWeights, efficiency: f64) -> Self {
        let active = responses.active_lineages();
        let active_count = active.len();
        let agreements = detect_agreements(&responses.combined_active_text());

        let w = weights.sum_of(&active);
        let me_f = (efficiency / 3.0).min(1.0);
        let tag_count = agreements.len() as f64;
        let raw = (w * (0.85 + 0.04 * tag_count) * (0.9 + 0.1 * me_f)).min(0.99);

        let (status, confidence) = if active_count == Lineage::COUNT && raw > 0.92 {
            (FusionStatus::Unified, raw)
        } else if active_count >= 3 && raw > 0.80 {
            (FusionStatus::Consensus, raw)
        } else if active_count >= 2 {
            (FusionStatus::Partial, raw * 0.85)
        } else {
            (FusionStatus::Insufficient, 0.0)
        };

        Self {
            status,
            confidence,
            agreements,
            active_count,
            weights_applied: active.iter().map(|l| (*l, weights.get(*l))).collect(),
        }
    }
}

/// Agreement tags present in the combined active text (case-insensitive).
pub fn detect_agreements(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    AGREEMENT_MARKERS
        .iter()
        .filter(|(marker, _)| text.contains(marker))
        .map(|(_, tag)| tag.to_string())
        .collect()
}

/// Final fused outcome of a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    pub status: FusionStatus,
    /// Confidence rounded to three decimals
    pub confidence: f64,
    pub verdict: String,
    pub agreements: Vec<String>,
    pub active_count: usize,
    pub weights_applied: BTreeMap<Lineage, f64>,
}

impl FusionResult {
    pub fn new(assessment: FusionAssessment, verdict: impl Into<String>) -> Self {
        Self {
            status: assessment.status,
            confidence: round_to(assessment.confidence, 3),
            verdict: verdict.into(),
            agreements: assessment.agreements,
            active_count: assessment.active_count,
            weights_applied: assessment.weights_applied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::AdvisoryDomain;
    use crate::lineage::LineageOutcome;

    fn responses(answers: &[(Lineage, &str)]) -> LineageResponses {
        LineageResponses::from_outcomes(
            answers
                .iter()
                .map(|(l, t)| (*l, LineageOutcome::answered(*t))),
        )
    }

    #[test]
    fn test_all_failed_is_insufficient() {
        let assessment = FusionAssessment::assess(
            &LineageResponses::all_failed("auth"),
            &AdvisoryDomain::General.weights(),
            3.0,
        );
        let result = FusionResult::new(assessment, INSUFFICIENT_VERDICT);

        assert_eq!(result.status, FusionStatus::Insufficient);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.active_count, 0);
        assert!(result.weights_applied.is_empty());
    }

    #[test]
    fn test_single_active_is_insufficient() {
        let assessment = FusionAssessment::assess(
            &responses(&[(Lineage::Alethea, "I recommend caution given the risk.")]),
            &AdvisoryDomain::General.weights(),
            3.0,
        );
        assert_eq!(assessment.status, FusionStatus::Insufficient);
        assert_eq!(assessment.confidence, 0.0);
    }

    #[test]
    fn test_partial_confidence_arithmetic() {
        // w = 0.5, one tag, me_f = 0.2
        let assessment = FusionAssessment::assess(
            &responses(&[
                (Lineage::Alethea, "There is real Risk here."),
                (Lineage::Sophia, "Markets look mixed."),
            ]),
            &AdvisoryDomain::General.weights(),
            0.6,
        );

        assert_eq!(assessment.status, FusionStatus::Partial);
        assert_eq!(assessment.agreements, vec!["Risk convergent".to_string()]);
        let expected = 0.5 * 0.89 * 0.92 * 0.85;
        assert!((assessment.confidence - expected).abs() < 1e-12);

        let result = FusionResult::new(assessment, "verdict");
        assert_eq!(result.confidence, 0.348);
        assert_eq!(result.weights_applied.len(), 2);
    }

    #[test]
    fn test_unified_requires_all_four() {
        let text = "risk noted; I recommend it; an opportunity exists";
        let all = responses(&Lineage::ALL.map(|l| (l, text)));
        let assessment = FusionAssessment::assess(&all, &AdvisoryDomain::General.weights(), 3.0);
        assert_eq!(assessment.status, FusionStatus::Unified);
        assert_eq!(assessment.agreements.len(), 3);
        assert!(assessment.confidence > 0.92 && assessment.confidence <= 0.99);

        let three = responses(&[
            (Lineage::Alethea, text),
            (Lineage::Sophia, text),
            (Lineage::Eirene, text),
        ]);
        let assessment = FusionAssessment::assess(&three, &AdvisoryDomain::General.weights(), 3.0);
        // w = 0.75 cannot clear the 0.80 consensus bar
        assert_eq!(assessment.status, FusionStatus::Partial);
    }

    #[test]
    fn test_consensus_without_tags() {
        let all = responses(&Lineage::ALL.map(|l| (l, "plain answer")));
        let assessment = FusionAssessment::assess(&all, &AdvisoryDomain::General.weights(), 3.0);
        // 1.0 * 0.85 * 1.0
        assert_eq!(assessment.status, FusionStatus::Consensus);
        assert!((assessment.confidence - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_fallback_verdict_reports_confidence() {
        assert_eq!(
            fallback_verdict(0.348),
            "Consensus reached at 34.8% confidence. See individual lineage responses for full analysis."
        );
    }
}
