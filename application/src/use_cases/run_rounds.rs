//! Run Rounds use case
//!
//! Consults all four lineages in parallel for a planned number of rounds.
//! Round 1 sees only the request; each later round also sees the answers
//! of the round before it.

use crate::config::ExecutionParams;
use crate::ports::lineage_gateway::{GatewayError, LineageGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::round_logger::{NoRoundLogger, RoundEvent, RoundLogger};
use council_domain::{
    AdvisorProfile, AdvisoryDomain, Lineage, LineageOutcome, LineageResponses, PromptTemplate,
    RoundRecord,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Why the remaining rounds were abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interrupt {
    Deadline,
    Cancelled,
}

impl Interrupt {
    fn cause(&self) -> &'static str {
        match self {
            Interrupt::Deadline => "deadline exceeded",
            Interrupt::Cancelled => "cancelled",
        }
    }
}

/// Input for the RunRounds use case
#[derive(Debug, Clone)]
pub struct RunRoundsInput {
    pub query: String,
    pub domain: AdvisoryDomain,
    pub profile: AdvisorProfile,
    /// Planned number of rounds (1..=3)
    pub rounds: u8,
    /// Budget covering every round
    pub deadline: Duration,
}

/// Result of the round loop
#[derive(Debug, Clone)]
pub struct RoundsOutcome {
    /// Every round that completed, in order
    pub rounds: Vec<RoundRecord>,
    /// Input to fusion: the last completed round, or an all-failed map
    /// when no round completed
    pub final_responses: LineageResponses,
    /// `true` if the deadline or a cancellation stopped the loop early
    pub cut_short: bool,
}

/// Use case for running the deliberation rounds
pub struct RunRoundsUseCase<G: LineageGateway + 'static> {
    gateway: Arc<G>,
    params: ExecutionParams,
    logger: Arc<dyn RoundLogger>,
    cancellation: Option<CancellationToken>,
}

impl<G: LineageGateway + 'static> RunRoundsUseCase<G> {
    pub fn new(gateway: Arc<G>, params: ExecutionParams) -> Self {
        Self {
            gateway,
            params,
            logger: Arc::new(NoRoundLogger),
            cancellation: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RoundLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Attach a token; cancelling it is treated like the deadline expiring.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: &RunRoundsInput) -> RoundsOutcome {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: &RunRoundsInput,
        progress: &dyn ProgressNotifier,
    ) -> RoundsOutcome {
        let deadline = Instant::now() + input.deadline;
        let mut rounds: Vec<RoundRecord> = Vec::with_capacity(input.rounds as usize);
        let mut interrupt = None;

        info!(
            "Starting {} round(s), deadline {:?}",
            input.rounds, input.deadline
        );

        for round in 1..=input.rounds {
            let previous = rounds.last().map(|r| &r.responses);
            let run = self.run_round(input, round, previous, progress);

            let completed = tokio::select! {
                biased;
                _ = Self::cancelled(self.cancellation.as_ref()) => Err(Interrupt::Cancelled),
                result = tokio::time::timeout_at(deadline, run) => {
                    result.map_err(|_| Interrupt::Deadline)
                }
            };

            match completed {
                Ok(responses) => rounds.push(RoundRecord { round, responses }),
                Err(reason) => {
                    warn!(
                        "Round {} abandoned ({}); {} round(s) completed",
                        round,
                        reason.cause(),
                        rounds.len()
                    );
                    self.logger.log(RoundEvent::new(
                        "rounds_cut_short",
                        json!({ "round": round, "reason": reason.cause() }),
                    ));
                    progress.on_rounds_cut_short(rounds.len() as u8);
                    interrupt = Some(reason);
                    break;
                }
            }
        }

        let final_responses = match rounds.last() {
            Some(last) => last.responses.clone(),
            None => LineageResponses::all_failed(
                interrupt.map_or("no rounds scheduled", |r| r.cause()),
            ),
        };

        RoundsOutcome {
            rounds,
            final_responses,
            cut_short: interrupt.is_some(),
        }
    }

    async fn cancelled(token: Option<&CancellationToken>) {
        match token {
            Some(token) => token.cancelled().await,
            None => std::future::pending().await,
        }
    }

    /// Run one round: every lineage in parallel, each under the call timeout
    async fn run_round(
        &self,
        input: &RunRoundsInput,
        round: u8,
        previous: Option<&LineageResponses>,
        progress: &dyn ProgressNotifier,
    ) -> LineageResponses {
        info!("Round {}/{}", round, input.rounds);
        progress.on_round_start(round, input.rounds, Lineage::COUNT);

        let context = PromptTemplate::round_context(&input.profile, input.domain, round);
        let prompt: Arc<str> = match previous {
            Some(previous) => PromptTemplate::refinement_round(&context, &input.query, previous),
            None => PromptTemplate::initial_round(&context, &input.query),
        }
        .into();

        self.logger.log(RoundEvent::new(
            "round_started",
            json!({ "round": round, "total_rounds": input.rounds, "prompt": &*prompt }),
        ));

        let mut join_set = JoinSet::new();

        for lineage in Lineage::ALL {
            let gateway = Arc::clone(&self.gateway);
            let system = input.domain.role(lineage);
            let prompt = Arc::clone(&prompt);
            let timeout = self.params.call_timeout;

            join_set.spawn(async move {
                let result = Self::consult_lineage(&gateway, lineage, system, &prompt, timeout).await;
                (lineage, result)
            });
        }

        let mut outcomes = Vec::with_capacity(Lineage::COUNT);

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((lineage, Ok(text))) => {
                    info!("{} responded in round {}", lineage, round);
                    progress.on_lineage_complete(round, lineage, true);
                    self.logger.log(RoundEvent::new(
                        "lineage_response",
                        json!({ "round": round, "lineage": lineage, "status": "answered", "text": &text }),
                    ));
                    outcomes.push((lineage, LineageOutcome::answered(text)));
                }
                Ok((lineage, Err(e))) => {
                    warn!("{} failed in round {}: {}", lineage, round, e);
                    progress.on_lineage_complete(round, lineage, false);
                    self.logger.log(RoundEvent::new(
                        "lineage_response",
                        json!({ "round": round, "lineage": lineage, "status": "failed", "error": e.to_string() }),
                    ));
                    outcomes.push((lineage, LineageOutcome::failed(e.to_string())));
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        let responses = LineageResponses::from_outcomes(outcomes);
        debug!(
            "Round {} complete: {}/{} lineages active",
            round,
            responses.active_count(),
            Lineage::COUNT
        );
        self.logger.log(RoundEvent::new(
            "round_completed",
            json!({ "round": round, "active": responses.active_lineages() }),
        ));
        progress.on_round_complete(round);

        responses
    }

    /// Consult a single lineage under the per-call timeout
    async fn consult_lineage(
        gateway: &G,
        lineage: Lineage,
        system: &str,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError> {
        let text = tokio::time::timeout(timeout, gateway.consult(lineage, system, prompt))
            .await
            .map_err(|_| GatewayError::Timeout)??;

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}
