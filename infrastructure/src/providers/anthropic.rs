//! Anthropic messages API adapter

use super::{CompletionRequest, ProviderAdapter, ProviderEndpoint, ProviderKind, read_json, send_error};
use async_trait::async_trait;
use council_application::GatewayError;
use serde_json::{Value, json};

const API_VERSION: &str = "2023-06-01";

pub struct AnthropicAdapter {
    endpoint: ProviderEndpoint,
    client: reqwest::Client,
}

impl AnthropicAdapter {
    pub fn new(endpoint: ProviderEndpoint, client: reqwest::Client) -> Self {
        Self { endpoint, client }
    }

    fn payload(&self, request: &CompletionRequest<'_>) -> Value {
        json!({
            "model": self.endpoint.model,
            "max_tokens": request.max_tokens,
            "system": request.system,
            "messages": [{ "role": "user", "content": request.prompt }],
        })
    }
}

/// Concatenate the text blocks of a messages body
pub(crate) fn extract_text(data: &Value) -> Result<String, GatewayError> {
    let blocks = data
        .get("content")
        .and_then(|c| c.as_array())
        .ok_or_else(|| GatewayError::MalformedResponse("No content array in response".to_string()))?;

    Ok(blocks
        .iter()
        .filter_map(|b| b.get("text").and_then(|t| t.as_str()))
        .collect())
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn model(&self) -> &str {
        &self.endpoint.model
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, GatewayError> {
        let url = format!("{}/messages", self.endpoint.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.endpoint.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.payload(&request))
            .send()
            .await
            .map_err(send_error)?;

        extract_text(&read_json(response).await?)
    }
}
