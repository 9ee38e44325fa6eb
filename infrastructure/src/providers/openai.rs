//! OpenAI-compatible chat completions adapter
//!
//! Also serves xAI, which exposes the same API under a different base URL.

use super::{CompletionRequest, ProviderAdapter, ProviderEndpoint, ProviderKind, read_json, send_error};
use async_trait::async_trait;
use council_application::GatewayError;
use serde_json::{Value, json};

pub struct OpenAiAdapter {
    endpoint: ProviderEndpoint,
    client: reqwest::Client,
}

impl OpenAiAdapter {
    pub fn new(endpoint: ProviderEndpoint, client: reqwest::Client) -> Self {
        Self { endpoint, client }
    }

    fn payload(&self, request: &CompletionRequest<'_>) -> Value {
        json!({
            "model": self.endpoint.model,
            "max_tokens": request.max_tokens,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.prompt },
            ],
        })
    }
}

/// Pull the assistant text out of a chat completions body
pub(crate) fn extract_text(data: &Value) -> Result<String, GatewayError> {
    data.get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .ok_or_else(|| GatewayError::MalformedResponse("No choices in response".to_string()))
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn model(&self) -> &str {
        &self.endpoint.model
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.endpoint.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&self.payload(&request))
            .send()
            .await
            .map_err(send_error)?;

        extract_text(&read_json(response).await?)
    }
}
