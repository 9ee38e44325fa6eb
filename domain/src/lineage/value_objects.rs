//! Lineage response value objects - the immutable per-round output map.
//!
//! - [`LineageOutcome`] - one lineage's answer or failure
//! - [`LineageResponses`] - the complete map for one round, always keyed by all four lineages
//! - [`RoundRecord`] - a completed round and its number

use super::entities::Lineage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a single lineage call
///
/// Failures are carried as data rather than inspected by substring, so a
/// legitimate answer that happens to contain the word "unavailable" still
/// counts as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum LineageOutcome {
    /// The lineage answered with this text
    Answered(String),
    /// The lineage could not answer; holds the cause
    Failed(String),
}

impl LineageOutcome {
    pub fn answered(text: impl Into<String>) -> Self {
        LineageOutcome::Answered(text.into())
    }

    pub fn failed(cause: impl Into<String>) -> Self {
        LineageOutcome::Failed(cause.into())
    }

    /// Returns `true` if the lineage produced an answer.
    pub fn is_active(&self) -> bool {
        matches!(self, LineageOutcome::Answered(_))
    }

    /// The answer text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            LineageOutcome::Answered(text) => Some(text),
            LineageOutcome::Failed(_) => None,
        }
    }

    /// Render the outcome the way it is shown to other lineages and in
    /// the proof stamp: answer text, or `"<Name> unavailable: <cause>"`.
    pub fn render(&self, lineage: Lineage) -> String {
        match self {
            LineageOutcome::Answered(text) => text.clone(),
            LineageOutcome::Failed(cause) => {
                format!("{} unavailable: {}", lineage.display_name(), cause)
            }
        }
    }
}

/// Response map for one round, keyed by every lineage
///
/// Built once when a round completes and never mutated afterwards; the
/// orchestrator passes it by shared reference into the next round's prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Lineage, LineageOutcome>", from = "BTreeMap<Lineage, LineageOutcome>")]
pub struct LineageResponses {
    outcomes: BTreeMap<Lineage, LineageOutcome>,
}

impl LineageResponses {
    /// Build a complete map from the outcomes collected in a round.
    ///
    /// Any lineage missing from `outcomes` (e.g. its task panicked) is
    /// recorded as failed so the key set is always complete.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = (Lineage, LineageOutcome)>) -> Self {
        let mut map: BTreeMap<Lineage, LineageOutcome> = outcomes.into_iter().collect();
        for lineage in Lineage::ALL {
            map.entry(lineage)
                .or_insert_with(|| LineageOutcome::failed("no response"));
        }
        Self { outcomes: map }
    }

    /// Map in which every lineage failed for the same reason.
    pub fn all_failed(cause: &str) -> Self {
        Self::from_outcomes(
            Lineage::ALL
                .iter()
                .map(|l| (*l, LineageOutcome::failed(cause))),
        )
    }

    pub fn get(&self, lineage: Lineage) -> &LineageOutcome {
        // Key set is complete by construction.
        &self.outcomes[&lineage]
    }

    /// Iterate all outcomes in canonical lineage order.
    pub fn iter(&self) -> impl Iterator<Item = (Lineage, &LineageOutcome)> {
        self.outcomes.iter().map(|(l, o)| (*l, o))
    }

    /// Iterate only the lineages that answered, with their text.
    pub fn active(&self) -> impl Iterator<Item = (Lineage, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(l, o)| o.text().map(|t| (*l, t)))
    }

    pub fn active_lineages(&self) -> Vec<Lineage> {
        self.active().map(|(l, _)| l).collect()
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// All answer text joined by spaces (failures excluded).
    pub fn combined_active_text(&self) -> String {
        self.active().map(|(_, t)| t).collect::<Vec<_>>().join(" ")
    }
}

impl From<BTreeMap<Lineage, LineageOutcome>> for LineageResponses {
    fn from(outcomes: BTreeMap<Lineage, LineageOutcome>) -> Self {
        Self::from_outcomes(outcomes)
    }
}

impl From<LineageResponses> for BTreeMap<Lineage, LineageOutcome> {
    fn from(responses: LineageResponses) -> Self {
        responses.outcomes
    }
}

/// A completed round, kept for observability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (1-indexed)
    pub round: u8,
    pub responses: LineageResponses,
}
