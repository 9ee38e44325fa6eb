//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod lineage_gateway;
pub mod progress;
pub mod round_logger;
