//! Provider adapters
//!
//! One adapter per wire protocol. Each lineage is routed to exactly one
//! adapter by [`LineageRouter`](router::LineageRouter).

pub mod anthropic;
pub mod gemini;
pub mod openai;
pub mod router;

use async_trait::async_trait;
use council_application::GatewayError;
use council_domain::util::truncate_chars;
use serde::{Deserialize, Serialize};

/// Characters of an error body kept in [`GatewayError::HttpStatus`]
const ERROR_BODY_CHARS: usize = 200;

/// Wire protocol spoken by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI-compatible chat completions (OpenAI, xAI, ...)
    #[default]
    OpenAi,
    /// Anthropic messages API
    Anthropic,
    /// Google Gemini generateContent
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where and as whom to call a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint {
    pub model: String,
    /// Base URL without trailing slash
    pub base_url: String,
    pub api_key: String,
}

impl ProviderEndpoint {
    pub fn new(model: impl Into<String>, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

/// A single system + user completion
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;
    fn model(&self) -> &str;
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, GatewayError>;
}

/// Map a transport-level failure
pub(crate) fn send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

/// Check the status and parse the JSON body
pub(crate) async fn read_json(
    response: reqwest::Response,
) -> Result<serde_json::Value, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::HttpStatus {
            status: status.as_u16(),
            message: truncate_chars(body.trim(), ERROR_BODY_CHARS).to_string(),
        });
    }

    response
        .json()
        .await
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}
