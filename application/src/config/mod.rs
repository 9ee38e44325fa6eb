//! Application-level configuration.
//!
//! - [`ExecutionParams`] - per-call timeout and per-urgency round deadlines

pub mod execution_params;

pub use execution_params::{ExecutionParams, UrgencyDeadlines};
