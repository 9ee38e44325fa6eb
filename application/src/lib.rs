//! Application layer for sovereign-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, UrgencyDeadlines};
pub use ports::{
    lineage_gateway::{GatewayError, LineageGateway},
    progress::{NoProgress, ProgressNotifier},
    round_logger::{NoRoundLogger, RoundEvent, RoundLogger},
};
pub use use_cases::fuse_verdict::{FuseVerdictInput, FuseVerdictUseCase};
pub use use_cases::run_council::{CouncilRequest, GridReading, RunCouncilUseCase};
pub use use_cases::run_rounds::{RoundsOutcome, RunRoundsInput, RunRoundsUseCase};
