use super::anthropic::AnthropicAdapter;
use super::gemini::GeminiAdapter;
use super::openai::OpenAiAdapter;
use super::{CompletionRequest, ProviderAdapter, ProviderEndpoint, ProviderKind};
use crate::config::FileProvidersConfig;
use async_trait::async_trait;
use council_application::{GatewayError, LineageGateway};
use council_domain::Lineage;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

struct Route {
    adapter: Arc<dyn ProviderAdapter>,
    max_tokens: u32,
}

/// Routes each lineage to its configured provider.
///
/// A lineage without credentials keeps a placeholder that fails every call
/// with [`GatewayError::MissingCredentials`]; the council still runs with
/// the remaining lineages.
pub struct LineageRouter {
    routes: BTreeMap<Lineage, Result<Route, String>>,
    synthesis_max_tokens: u32,
}

impl LineageRouter {
    pub fn new(synthesis_max_tokens: u32) -> Self {
        Self {
            routes: BTreeMap::new(),
            synthesis_max_tokens,
        }
    }

    pub fn with_route(
        mut self,
        lineage: Lineage,
        adapter: Arc<dyn ProviderAdapter>,
        max_tokens: u32,
    ) -> Self {
        self.routes
            .insert(lineage, Ok(Route { adapter, max_tokens }));
        self
    }

    pub fn with_unavailable(mut self, lineage: Lineage, reason: impl Into<String>) -> Self {
        self.routes.insert(lineage, Err(reason.into()));
        self
    }

    /// Build from config, reading API keys from the process environment.
    pub fn from_config(config: &FileProvidersConfig, client: reqwest::Client) -> Self {
        Self::from_config_with_env(config, client, &|name| std::env::var(name).ok())
    }

    pub fn from_config_with_env(
        config: &FileProvidersConfig,
        client: reqwest::Client,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Self {
        let mut router = Self::new(config.synthesis_max_tokens);

        for lineage in Lineage::ALL {
            let provider = config.get(lineage);
            let Some(api_key) = provider.resolve_api_key(env) else {
                debug!("{}: {} is not set", lineage, provider.api_key_env);
                router = router.with_unavailable(lineage, format!("{} is not set", provider.api_key_env));
                continue;
            };

            let endpoint = ProviderEndpoint::new(provider.model.clone(), &provider.base_url, api_key);
            let adapter: Arc<dyn ProviderAdapter> = match provider.kind {
                ProviderKind::OpenAi => Arc::new(OpenAiAdapter::new(endpoint, client.clone())),
                ProviderKind::Anthropic => Arc::new(AnthropicAdapter::new(endpoint, client.clone())),
                ProviderKind::Gemini => Arc::new(GeminiAdapter::new(endpoint, client.clone())),
            };
            router = router.with_route(lineage, adapter, provider.max_tokens);
        }

        router
    }

    /// One line per lineage: `<kind>/<model>` or why it is unavailable
    pub fn describe(&self) -> Vec<(Lineage, String)> {
        Lineage::ALL
            .into_iter()
            .map(|lineage| {
                let text = match self.routes.get(&lineage) {
                    Some(Ok(route)) => format!("{}/{}", route.adapter.kind(), route.adapter.model()),
                    Some(Err(reason)) => format!("unavailable ({})", reason),
                    None => "unavailable (not configured)".to_string(),
                };
                (lineage, text)
            })
            .collect()
    }

    fn route(&self, lineage: Lineage) -> Result<&Route, GatewayError> {
        match self.routes.get(&lineage) {
            Some(Ok(route)) => Ok(route),
            Some(Err(reason)) => Err(GatewayError::MissingCredentials(reason.clone())),
            None => Err(GatewayError::MissingCredentials(
                "no provider configured".to_string(),
            )),
        }
    }
}

#[async_trait]
impl LineageGateway for LineageRouter {
    async fn consult(
        &self,
        lineage: Lineage,
        system: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let route = self.route(lineage)?;
        route
            .adapter
            .complete(CompletionRequest {
                system,
                prompt,
                max_tokens: route.max_tokens,
            })
            .await
    }

    async fn synthesize(&self, system: &str, prompt: &str) -> Result<String, GatewayError> {
        let route = self.route(Lineage::synthesizer())?;
        route
            .adapter
            .complete(CompletionRequest {
                system,
                prompt,
                max_tokens: self.synthesis_max_tokens,
            })
            .await
    }
}
