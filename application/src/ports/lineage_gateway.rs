//! Lineage Gateway port
//!
//! Defines the interface for consulting the external model behind each lineage.

use async_trait::async_trait;
use council_domain::Lineage;
use thiserror::Error;

/// Errors that can occur during a single lineage call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for lineage communication
///
/// One call per lineage per round: a system instruction (the lineage's role
/// for the request's domain) and a user prompt, answered with text.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LineageGateway: Send + Sync {
    /// Ask `lineage` a single question
    async fn consult(
        &self,
        lineage: Lineage,
        system: &str,
        prompt: &str,
    ) -> Result<String, GatewayError>;

    /// Ask the verdict synthesizer for the unified recommendation.
    ///
    /// Defaults to an ordinary call to [`Lineage::synthesizer`]; adapters may
    /// override it to allow a longer answer.
    async fn synthesize(&self, system: &str, prompt: &str) -> Result<String, GatewayError> {
        self.consult(Lineage::synthesizer(), system, prompt).await
    }
}
