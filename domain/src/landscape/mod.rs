//! Probability landscape
//!
//! A small set of mutually exclusive decision options with integer
//! probabilities that always sum to exactly 100.

use crate::lineage::LineageResponses;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Total probability mass
pub const TOTAL_MASS: u32 = 100;

/// Smallest share a non-final option is drawn with (when mass allows)
pub const MIN_SHARE: u32 = 10;

/// Keyword families checked in order; each contributes at most one option.
const OPTION_FAMILIES: [(&str, &[&str]); 4] = [
    ("Buy/Increase", &["buy", "increase", "add", "positive"]),
    ("Sell/Reduce", &["sell", "reduce", "trim"]),
    ("Hold/Maintain", &["hold", "maintain", "keep"]),
    ("Wait/Monitor", &["wait", "monitor", "watch"]),
];

/// Options used when no keyword family matches
const DEFAULT_OPTIONS: [&str; 4] = ["Proceed", "Modify", "Delay", "Gather info"];

/// One option and its probability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionProbability {
    pub option: String,
    pub probability: u32,
}

/// Options sorted by descending probability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityLandscape {
    entries: Vec<OptionProbability>,
}

impl ProbabilityLandscape {
    /// Build a landscape from the final responses.
    ///
    /// Caller-supplied `options` are used as-is when non-empty; otherwise
    /// options are derived from the answer text.
    pub fn build<R: Rng + ?Sized>(
        responses: &LineageResponses,
        options: Option<&[String]>,
        rng: &mut R,
    ) -> Self {
        let options = match options {
            Some(custom) if !custom.is_empty() => custom.to_vec(),
            _ => derive_options(&responses.combined_active_text()),
        };
        Self::assign(&options, rng)
    }

    /// Distribute 100 points over `options`.
    ///
    /// Each non-final option draws from `[10, remaining − 10 × options_left]`
    /// (narrowed when that range is empty); the last option takes the rest.
    pub fn assign<R: Rng + ?Sized>(options: &[String], rng: &mut R) -> Self {
        let mut remaining = TOTAL_MASS;
        let mut entries = Vec::with_capacity(options.len());

        for (i, option) in options.iter().enumerate() {
            let options_left = (options.len() - i - 1) as u32;
            let probability = if options_left == 0 {
                remaining
            } else {
                let upper = remaining.saturating_sub(options_left * MIN_SHARE);
                let lower = MIN_SHARE.min(upper);
                rng.gen_range(lower..=upper)
            };
            remaining -= probability;
            entries.push(OptionProbability {
                option: option.clone(),
                probability,
            });
        }

        entries.sort_by(|a, b| b.probability.cmp(&a.probability));
        Self { entries }
    }

    pub fn entries(&self) -> &[OptionProbability] {
        &self.entries
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.probability).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive decision options from combined answer text.
pub fn derive_options(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let options: Vec<String> = OPTION_FAMILIES
        .iter()
        .filter(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(label, _)| label.to_string())
        .collect();

    if options.is_empty() {
        DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        options
    }
}
