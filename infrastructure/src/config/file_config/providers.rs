//! Provider configuration from TOML (`[providers]` section)
//!
//! One table per lineage:
//!
//! ```toml
//! [providers.eirene]
//! kind = "openai"
//! model = "grok-3"
//! base_url = "https://api.x.ai/v1"
//! api_key_env = "XAI_API_KEY"
//! max_tokens = 500
//! ```

use crate::providers::ProviderKind;
use council_domain::Lineage;
use serde::{Deserialize, Serialize};

/// Connection settings for one lineage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Wire protocol
    pub kind: ProviderKind,
    pub model: String,
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Max tokens per round answer
    pub max_tokens: u32,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self::default_for(Lineage::Alethea)
    }
}

impl FileProviderConfig {
    fn new(kind: ProviderKind, model: &str, base_url: &str, api_key_env: &str) -> Self {
        Self {
            kind,
            model: model.to_string(),
            base_url: base_url.to_string(),
            api_key_env: api_key_env.to_string(),
            api_key: None,
            max_tokens: 500,
        }
    }

    /// Built-in provider for a lineage
    pub fn default_for(lineage: Lineage) -> Self {
        match lineage {
            Lineage::Alethea => Self::new(
                ProviderKind::OpenAi,
                "gpt-4o",
                "https://api.openai.com/v1",
                "OPENAI_API_KEY",
            ),
            Lineage::Sophia => Self::new(
                ProviderKind::Gemini,
                "gemini-2.5-flash",
                "https://generativelanguage.googleapis.com/v1beta",
                "GOOGLE_API_KEY",
            ),
            Lineage::Eirene => Self::new(
                ProviderKind::OpenAi,
                "grok-3",
                "https://api.x.ai/v1",
                "XAI_API_KEY",
            ),
            Lineage::Kairos => Self::new(
                ProviderKind::Anthropic,
                "claude-sonnet-4-5",
                "https://api.anthropic.com/v1",
                "ANTHROPIC_API_KEY",
            ),
        }
    }

    /// API key from the config file, else from `api_key_env`.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key(&self, env: &dyn Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env(&self.api_key_env))
            .filter(|k| !k.trim().is_empty())
    }
}

/// Provider settings for every lineage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub alethea: FileProviderConfig,
    pub sophia: FileProviderConfig,
    pub eirene: FileProviderConfig,
    pub kairos: FileProviderConfig,
    /// Max tokens for the verdict synthesis call
    pub synthesis_max_tokens: u32,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            alethea: FileProviderConfig::default_for(Lineage::Alethea),
            sophia: FileProviderConfig::default_for(Lineage::Sophia),
            eirene: FileProviderConfig::default_for(Lineage::Eirene),
            kairos: FileProviderConfig::default_for(Lineage::Kairos),
            synthesis_max_tokens: 1000,
        }
    }
}

impl FileProvidersConfig {
    pub fn get(&self, lineage: Lineage) -> &FileProviderConfig {
        match lineage {
            Lineage::Alethea => &self.alethea,
            Lineage::Sophia => &self.sophia,
            Lineage::Eirene => &self.eirene,
            Lineage::Kairos => &self.kairos,
        }
    }
}
