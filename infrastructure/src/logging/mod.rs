//! Logging infrastructure: the structured round transcript.
//!
//! Provides [`JsonlRoundLogger`], a JSONL file writer that implements
//! the [`RoundLogger`](council_application::RoundLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRoundLogger;
