//! Domain layer for sovereign-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Lineages
//!
//! Four independent advisory lineages (Alethea, Sophia, Eirene, Kairos) are
//! consulted in parallel. Each round produces a complete [`LineageResponses`]
//! map, with failures carried as data.
//!
//! ## Classification
//!
//! A request is classified by urgency, scored against external load and
//! price ([`EfficiencyScore`]), checked for rest mode ([`RestDecision`]) and
//! given a [`RoundPlan`]: how many deliberation rounds it gets, possibly none.
//!
//! ## Fusion
//!
//! The final round is reduced to a [`FusionStatus`] and confidence, a
//! [`ProbabilityLandscape`] over decision options, and a [`ProofStamp`].

pub mod advisory;
pub mod classifier;
pub mod config;
pub mod envelope;
pub mod fusion;
pub mod landscape;
pub mod lineage;
pub mod prompt;
pub mod proof;
pub mod util;

// Re-export commonly used types
pub use advisory::{AdvisorProfile, AdvisoryDomain, LineageWeights, tier_multiplier};
pub use classifier::{
    Classification, EfficiencyScore, InferenceMode, LoadSignals, MAX_ROUNDS, REST_CONSTANT,
    REST_LOAD_THRESHOLD, RestDecision, RoundPlan, SkipReason, UrgencyClass, social_cost_factor,
};
pub use config::OutputFormat;
pub use envelope::{AuditSummary, CouncilVerdict, DEFERRED_MESSAGE, Deliberation, UrgencyRecord};
pub use fusion::{
    FusionAssessment, FusionResult, FusionStatus, INSUFFICIENT_VERDICT, fallback_verdict,
};
pub use landscape::{OptionProbability, ProbabilityLandscape};
pub use lineage::{Lineage, LineageOutcome, LineageResponses, RoundRecord};
pub use prompt::PromptTemplate;
pub use proof::ProofStamp;
