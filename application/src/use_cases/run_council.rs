//! Run Council use case
//!
//! Orchestrates the full request flow:
//!
//! ```text
//! classify ──► deferred envelope            (plan has no rounds)
//!          └─► rounds ──► fusion ──► landscape ──► proof stamp ──► envelope
//! ```
//!
//! The flow is infallible: provider faults, timeouts and cancellation all
//! end up as failed lineage outcomes and a low-confidence verdict.

use crate::config::ExecutionParams;
use crate::ports::lineage_gateway::LineageGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::round_logger::{NoRoundLogger, RoundEvent, RoundLogger};
use crate::use_cases::fuse_verdict::{FuseVerdictInput, FuseVerdictUseCase};
use crate::use_cases::run_rounds::{RunRoundsInput, RunRoundsUseCase};
use council_domain::{
    AdvisorProfile, AdvisoryDomain, Classification, CouncilVerdict, Deliberation, LoadSignals,
    ProbabilityLandscape, ProofStamp,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// External load and price reading for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridReading {
    /// Load in [0, 1]
    pub load: f64,
    /// Price, ≥ 0
    pub price: f64,
}

impl GridReading {
    /// Build a reading, clamping out-of-range values.
    ///
    /// NaN reads as full load and an unbounded price, so an unusable
    /// reading never lets a request skip rest mode.
    pub fn new(load: f64, price: f64) -> Self {
        let load = if load.is_nan() { 1.0 } else { load };
        let price = if price.is_nan() { f64::INFINITY } else { price };
        Self {
            load: load.clamp(0.0, 1.0),
            price: price.max(0.0),
        }
    }
}

/// Input for the RunCouncil use case
#[derive(Debug, Clone)]
pub struct CouncilRequest {
    pub query: String,
    pub domain: AdvisoryDomain,
    /// Explicit urgency token (class name or legacy colour)
    pub urgency: Option<String>,
    pub grid: GridReading,
    /// Caller-supplied decision options for the landscape
    pub options: Option<Vec<String>>,
}

impl CouncilRequest {
    pub fn new(query: impl Into<String>, grid: GridReading) -> Self {
        Self {
            query: query.into(),
            domain: AdvisoryDomain::General,
            urgency: None,
            grid,
            options: None,
        }
    }

    pub fn with_domain(mut self, domain: AdvisoryDomain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_urgency(mut self, token: impl Into<String>) -> Self {
        self.urgency = Some(token.into());
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }
}

/// Use case for running a complete council request
pub struct RunCouncilUseCase<G: LineageGateway + 'static> {
    gateway: Arc<G>,
    params: ExecutionParams,
    profile: AdvisorProfile,
    logger: Arc<dyn RoundLogger>,
    cancellation: Option<CancellationToken>,
    /// Fixed landscape seed; entropy-seeded when absent
    rng_seed: Option<u64>,
}

impl<G: LineageGateway + 'static> RunCouncilUseCase<G> {
    pub fn new(gateway: Arc<G>, params: ExecutionParams, profile: AdvisorProfile) -> Self {
        Self {
            gateway,
            params,
            profile,
            logger: Arc::new(NoRoundLogger),
            cancellation: None,
            rng_seed: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RoundLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Classify a request without consulting anyone
    pub fn classify(&self, request: &CouncilRequest) -> Classification {
        Classification::classify(&LoadSignals {
            query: &request.query,
            urgency_override: request.urgency.as_deref(),
            load: request.grid.load,
            price: request.grid.price,
            tier: self.profile.tier,
            domain: request.domain,
        })
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, request: CouncilRequest) -> CouncilVerdict {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: CouncilRequest,
        progress: &dyn ProgressNotifier,
    ) -> CouncilVerdict {
        let classification = self.classify(&request);

        info!(
            "Classified as {} ({}), {}, rest {}",
            classification.urgency,
            classification.efficiency.equation,
            classification.efficiency.mode,
            classification.rest.status()
        );

        if classification.plan.is_skipped() {
            info!("Inference deferred: {:?}", classification.plan.skipped);
            return CouncilVerdict::deferred(request.query, request.domain, classification);
        }

        let rounds_use_case = {
            let use_case = RunRoundsUseCase::new(Arc::clone(&self.gateway), self.params.clone())
                .with_logger(Arc::clone(&self.logger));
            match &self.cancellation {
                Some(token) => use_case.with_cancellation(token.clone()),
                None => use_case,
            }
        };

        let rounds_input = RunRoundsInput {
            query: request.query.clone(),
            domain: request.domain,
            profile: self.profile.clone(),
            rounds: classification.plan.rounds,
            deadline: self.params.deadline_for(classification.urgency),
        };
        let outcome = rounds_use_case
            .execute_with_progress(&rounds_input, progress)
            .await;

        let fusion = FuseVerdictUseCase::new(Arc::clone(&self.gateway), self.params.clone())
            .execute(
                FuseVerdictInput {
                    query: &request.query,
                    domain: request.domain,
                    profile: &self.profile,
                    responses: &outcome.final_responses,
                    efficiency: classification.efficiency.me,
                },
                progress,
            )
            .await;

        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let landscape = ProbabilityLandscape::build(
            &outcome.final_responses,
            request.options.as_deref(),
            &mut rng,
        );
        let proof = ProofStamp::issue(&outcome.final_responses, fusion.status);

        self.logger.log(RoundEvent::new(
            "fusion_completed",
            json!({
                "status": fusion.status,
                "confidence": fusion.confidence,
                "active": fusion.active_count,
                "rounds_completed": outcome.rounds.len(),
                "proof": &proof.short,
            }),
        ));
        info!(
            "Verdict {} at {:.1}% after {} round(s), proof {}",
            fusion.status,
            fusion.confidence * 100.0,
            outcome.rounds.len(),
            proof.short
        );

        let deliberation = Deliberation {
            rounds: outcome.rounds,
            final_responses: outcome.final_responses,
            fusion,
            landscape,
            proof,
            cut_short: outcome.cut_short,
        };

        CouncilVerdict::deliberated(request.query, request.domain, classification, deliberation)
    }
}
