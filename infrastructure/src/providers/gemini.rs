//! Google Gemini generateContent adapter

use super::{CompletionRequest, ProviderAdapter, ProviderEndpoint, ProviderKind, read_json, send_error};
use async_trait::async_trait;
use council_application::GatewayError;
use serde_json::{Value, json};

pub struct GeminiAdapter {
    endpoint: ProviderEndpoint,
    client: reqwest::Client,
}

impl GeminiAdapter {
    pub fn new(endpoint: ProviderEndpoint, client: reqwest::Client) -> Self {
        Self { endpoint, client }
    }

    fn payload(&self, request: &CompletionRequest<'_>) -> Value {
        json!({
            "systemInstruction": { "parts": [{ "text": request.system }] },
            "contents": [{ "role": "user", "parts": [{ "text": request.prompt }] }],
            "generationConfig": { "maxOutputTokens": request.max_tokens },
        })
    }
}

/// Concatenate the text parts of the first candidate
pub(crate) fn extract_text(data: &Value) -> Result<String, GatewayError> {
    let parts = data
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| GatewayError::MalformedResponse("No candidates in response".to_string()))?;

    Ok(parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect())
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn model(&self) -> &str {
        &self.endpoint.model
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint.base_url, self.endpoint.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.endpoint.api_key)
            .json(&self.payload(&request))
            .send()
            .await
            .map_err(send_error)?;

        extract_text(&read_json(response).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let adapter = GeminiAdapter::new(
            ProviderEndpoint::new("gemini-2.5-flash", "https://example.test/v1beta", "key"),
            reqwest::Client::new(),
        );
        let payload = adapter.payload(&CompletionRequest {
            system: "role",
            prompt: "question",
            max_tokens: 500,
        });

        assert_eq!(payload["systemInstruction"]["parts"][0]["text"], "role");
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "question");
        assert_eq!(payload["generationConfig"]["maxOutputTokens"], 500);
    }

    #[test]
    fn test_extract_text() {
        let body = json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": "Reduce " }, { "text": "exposure." }] } }]
        });
        assert_eq!(extract_text(&body).unwrap(), "Reduce exposure.");
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(matches!(
            extract_text(&body),
            Err(GatewayError::MalformedResponse(_))
        ));
    }
}
