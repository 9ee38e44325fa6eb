//! Prompt templates for the council flow

use crate::advisory::{AdvisorProfile, AdvisoryDomain};
use crate::lineage::{Lineage, LineageResponses};
use crate::util::truncate_chars;

/// Characters of each previous-round answer carried into a refinement prompt
pub const PREVIOUS_EXCERPT_CHARS: usize = 250;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Static context line shared by every lineage in a round
    pub fn round_context(profile: &AdvisorProfile, domain: AdvisoryDomain, round: u8) -> String {
        format!(
            "Advisor: {}, Tier {}. Domain: {}. Round {}.",
            profile.name, profile.tier, domain, round
        )
    }

    /// Prompt for the first round: request and context only
    pub fn initial_round(context: &str, query: &str) -> String {
        format!(
            "{}\nQuery: {}\nProvide expert analysis in 3-4 sentences. Be specific.",
            context, query
        )
    }

    /// Prompt for a refinement round.
    ///
    /// Embeds only the answers of `previous`, each cut to
    /// [`PREVIOUS_EXCERPT_CHARS`] characters.
    pub fn refinement_round(context: &str, query: &str, previous: &LineageResponses) -> String {
        let mut prompt = format!("{}\nQuery: {}\nPrevious responses:\n", context, query);

        for (lineage, text) in previous.active() {
            prompt.push_str(&format!(
                "{}: {}\n",
                lineage.display_name(),
                truncate_chars(text, PREVIOUS_EXCERPT_CHARS)
            ));
        }

        prompt.push_str("Refine your analysis and resolve any conflicts between the responses above.");
        prompt
    }

    /// System instruction for the verdict synthesizer
    pub fn synthesis_system(domain: AdvisoryDomain, profile: &AdvisorProfile) -> String {
        format!(
            "You are the council fusion engine for domain: {}. Advisor: {}, Tier {}.",
            domain, profile.name, profile.tier
        )
    }

    /// Prompt asking the synthesizer for a single unified recommendation
    pub fn synthesis_prompt(query: &str, active: &[(Lineage, &str)]) -> String {
        let mut prompt = format!(
            "Independent advisory lineages have analyzed this query:\nQuery: {}\n\nLineage responses:\n",
            query
        );

        for (lineage, text) in active {
            prompt.push_str(&format!(
                "\n{}: {}\n",
                lineage.display_name().to_uppercase(),
                text
            ));
        }

        prompt.push_str(
            r#"
Write a clear, direct, plain-English verdict in 3-5 sentences.
Synthesize the key points of agreement. Give a specific actionable recommendation.
Do not mention the lineages by name. Speak as one unified voice."#,
        );

        prompt
    }
}
