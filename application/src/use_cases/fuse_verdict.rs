//! Fuse Verdict use case
//!
//! Scores the final round and asks the synthesizer lineage for one unified
//! recommendation. Synthesizer failures fall back to a fixed sentence built
//! from the confidence; this use case never fails.

use crate::config::ExecutionParams;
use crate::ports::lineage_gateway::{GatewayError, LineageGateway};
use crate::ports::progress::ProgressNotifier;
use council_domain::{
    AdvisorProfile, AdvisoryDomain, FusionAssessment, FusionResult, INSUFFICIENT_VERDICT,
    LineageResponses, PromptTemplate, fallback_verdict,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the FuseVerdict use case
#[derive(Debug, Clone, Copy)]
pub struct FuseVerdictInput<'a> {
    pub query: &'a str,
    pub domain: AdvisoryDomain,
    pub profile: &'a AdvisorProfile,
    /// Final round's responses
    pub responses: &'a LineageResponses,
    /// The request's efficiency score Me
    pub efficiency: f64,
}

/// Use case for fusing the final round into a verdict
pub struct FuseVerdictUseCase<G: LineageGateway + 'static> {
    gateway: Arc<G>,
    params: ExecutionParams,
}

impl<G: LineageGateway + 'static> FuseVerdictUseCase<G> {
    pub fn new(gateway: Arc<G>, params: ExecutionParams) -> Self {
        Self { gateway, params }
    }

    pub async fn execute(
        &self,
        input: FuseVerdictInput<'_>,
        progress: &dyn ProgressNotifier,
    ) -> FusionResult {
        let weights = input.domain.weights();
        let assessment = FusionAssessment::assess(input.responses, &weights, input.efficiency);

        info!(
            "Fusion: {} with {} active lineage(s), confidence {:.3}",
            assessment.status, assessment.active_count, assessment.confidence
        );

        if assessment.active_count == 0 {
            progress.on_fusion_complete(assessment.status);
            return FusionResult::new(assessment, INSUFFICIENT_VERDICT);
        }

        progress.on_fusion_start();
        let verdict = match self.synthesize(&input).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Verdict synthesis failed: {}", e);
                fallback_verdict(assessment.confidence)
            }
        };
        progress.on_fusion_complete(assessment.status);

        FusionResult::new(assessment, verdict)
    }

    async fn synthesize(&self, input: &FuseVerdictInput<'_>) -> Result<String, GatewayError> {
        let active: Vec<_> = input.responses.active().collect();
        let system = PromptTemplate::synthesis_system(input.domain, input.profile);
        let prompt = PromptTemplate::synthesis_prompt(input.query, &active);
        debug!("Synthesis prompt: {} chars", prompt.len());

        let text = tokio::time::timeout(
            self.params.call_timeout,
            self.gateway.synthesize(&system, &prompt),
        )
        .await
        .map_err(|_| GatewayError::Timeout)??;

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::{Script, ScriptedGateway};
    use council_domain::{FusionStatus, Lineage, LineageOutcome};

    fn responses(answered: &[(Lineage, &str)]) -> LineageResponses {
        LineageResponses::from_outcomes(
            answered
                .iter()
                .map(|(l, t)| (*l, LineageOutcome::answered(*t))),
        )
    }

    async fn fuse(gateway: ScriptedGateway, responses: &LineageResponses) -> (Arc<ScriptedGateway>, FusionResult) {
        let gateway = Arc::new(gateway);
        let use_case = FuseVerdictUseCase::new(Arc::clone(&gateway), ExecutionParams::default());
        let profile = AdvisorProfile::default();
        let result = use_case
            .execute(
                FuseVerdictInput {
                    query: "Should I rebalance?",
                    domain: AdvisoryDomain::General,
                    profile: &profile,
                    responses,
                    efficiency: 3.0,
                },
                &NoProgress,
            )
            .await;
        (gateway, result)
    }

    #[tokio::test]
    async fn test_synthesized_verdict() {
        let gateway = ScriptedGateway::new().with_synthesis(Script::text("Rebalance gradually."));
        let input = responses(&[
            (Lineage::Alethea, "Some risk here."),
            (Lineage::Sophia, "I recommend caution."),
            (Lineage::Eirene, "There is an opportunity."),
            (Lineage::Kairos, "Mostly agree."),
        ]);

        let (gateway, result) = fuse(gateway, &input).await;

        assert_eq!(result.verdict, "Rebalance gradually.");
        assert_eq!(result.status, FusionStatus::Unified);
        assert_eq!(result.agreements.len(), 3);

        let prompts = gateway.synthesis_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("SOPHIA: I recommend caution."));
    }

    #[tokio::test]
    async fn test_synthesizer_failure_falls_back() {
        let gateway = ScriptedGateway::new().with_synthesis(Script::Error("overloaded".to_string()));
        let input = responses(&[(Lineage::Alethea, "Hold."), (Lineage::Sophia, "Hold.")]);

        let (_, result) = fuse(gateway, &input).await;

        assert_eq!(result.status, FusionStatus::Partial);
        assert!(result.verdict.starts_with("Consensus reached at "));
        assert!(result.verdict.ends_with("See individual lineage responses for full analysis."));
    }

    #[tokio::test]
    async fn test_no_active_lineage_skips_synthesizer() {
        let gateway = ScriptedGateway::new();
        let input = LineageResponses::all_failed("offline");

        let (gateway, result) = fuse(gateway, &input).await;

        assert_eq!(result.status, FusionStatus::Insufficient);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.verdict, INSUFFICIENT_VERDICT);
        assert!(gateway.synthesis_prompts().is_empty());
    }
}
