//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod execution;
mod grid;
mod logging;
mod output;
mod profile;
mod providers;

pub use execution::{FileDeadlinesConfig, FileExecutionConfig};
pub use grid::{FileGridConfig, FileGridReading};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use profile::FileProfileConfig;
pub use providers::{FileProviderConfig, FileProvidersConfig};

use council_domain::{AdvisoryDomain, Lineage};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Advisor identity and account tier
    pub profile: FileProfileConfig,
    /// Provider per lineage
    pub providers: FileProvidersConfig,
    /// Timeouts and deadlines
    pub execution: FileExecutionConfig,
    /// Static grid baselines
    pub grid: FileGridConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript and diagnostic log locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Check the configuration, returning a message for every problem found.
    ///
    /// None of these stop the council from running; unusable values fall
    /// back to neutral multipliers or the general domain.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(1..=4).contains(&self.profile.tier) {
            issues.push(format!(
                "profile.tier: {} is outside 1..=4, tier multiplier falls back to 1.0",
                self.profile.tier
            ));
        }

        for tag in &self.profile.domains {
            if AdvisoryDomain::from_tag(tag) == AdvisoryDomain::General
                && !tag.eq_ignore_ascii_case("general")
            {
                issues.push(format!(
                    "profile.domains: unknown domain '{}', treated as 'general'",
                    tag
                ));
            }
        }

        for lineage in Lineage::ALL {
            let provider = self.providers.get(lineage);
            if provider.model.trim().is_empty() {
                issues.push(format!("providers.{}.model is empty", lineage.as_str()));
            }
            if provider.max_tokens == 0 {
                issues.push(format!("providers.{}.max_tokens is 0", lineage.as_str()));
            }
        }

        if self.execution.call_timeout_secs == 0 {
            issues.push("execution.call_timeout_secs is 0, every call will time out".to_string());
        }

        if self.grid.default_reading().is_err() {
            issues.push(format!(
                "grid.default_region: '{}' is not a configured region",
                self.grid.default_region
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderKind;
    use council_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[profile]
name = "Ada"
tier = 2
domains = ["wealth"]

[providers.kairos]
kind = "openai"
model = "gpt-4o-mini"
base_url = "http://localhost:8080/v1"
api_key_env = "LOCAL_KEY"
max_tokens = 300

[execution]
call_timeout_secs = 15

[grid]
default_region = "LOCAL"

[grid.regions.LOCAL]
load = 0.4
price = 0.05

[output]
format = "full"
color = false

[logging]
transcript = "council.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile.name, "Ada");
        assert_eq!(config.profile.tier, 2);
        assert_eq!(config.providers.kairos.kind, ProviderKind::OpenAi);
        assert_eq!(config.providers.kairos.max_tokens, 300);
        assert_eq!(config.execution.call_timeout_secs, 15);
        assert_eq!(config.grid.default_reading().unwrap().load, 0.4);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.logging.transcript.is_some());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.color);
        assert_eq!(config.profile, FileProfileConfig::default());
        assert_eq!(config.execution, FileExecutionConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let mut config = FileConfig::default();
        config.profile.tier = 9;
        config.profile.domains.push("astrology".to_string());
        config.providers.sophia.model.clear();
        config.grid.default_region = "NOWHERE".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert!(issues[0].starts_with("profile.tier"));
        assert!(issues.iter().any(|i| i.contains("astrology")));
        assert!(issues.iter().any(|i| i.starts_with("providers.sophia.model")));
        assert!(issues.iter().any(|i| i.contains("NOWHERE")));
    }
}
