//! Port for the structured round transcript.
//!
//! Defines the [`RoundLogger`] trait for recording what happened in each
//! round (prompts sent, lineage outcomes, fusion result) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures every
//! intermediate round in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured round event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The adapter adds the timestamp.
pub struct RoundEvent {
    /// Event type identifier (e.g., "round_started", "lineage_response").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RoundEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging round events to a structured log.
///
/// The `log` method is synchronous and non-fallible: logging failures are
/// silently ignored and never affect the request.
pub trait RoundLogger: Send + Sync {
    /// Record a round event.
    fn log(&self, event: RoundEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoRoundLogger;

impl RoundLogger for NoRoundLogger {
    fn log(&self, _event: RoundEvent) {}
}
