//! Advisor profile from TOML (`[profile]` section)

use council_domain::{AdvisorProfile, AdvisoryDomain};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProfileConfig {
    /// Name embedded in round prompts and the synthesis instruction
    pub name: String,
    /// Account tier 1..=4
    pub tier: u8,
    /// Domain tags this advisor works in
    pub domains: Vec<String>,
}

impl Default for FileProfileConfig {
    fn default() -> Self {
        let profile = AdvisorProfile::default();
        Self {
            name: profile.name,
            tier: profile.tier,
            domains: profile.domains.iter().map(|d| d.as_str().to_string()).collect(),
        }
    }
}

impl FileProfileConfig {
    pub fn to_profile(&self) -> AdvisorProfile {
        let mut profile = AdvisorProfile::new(self.name.clone(), self.tier);
        profile.domains = self.domains.iter().map(|d| AdvisoryDomain::from_tag(d)).collect();
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_domain_profile() {
        assert_eq!(FileProfileConfig::default().to_profile(), AdvisorProfile::default());
    }

    #[test]
    fn test_unknown_domain_tag_is_general() {
        let config = FileProfileConfig {
            name: "Ada".to_string(),
            tier: 2,
            domains: vec!["health".to_string(), "astrology".to_string()],
        };
        let profile = config.to_profile();
        assert_eq!(
            profile.domains,
            vec![AdvisoryDomain::Health, AdvisoryDomain::General]
        );
        assert_eq!(profile.tier, 2);
    }
}
