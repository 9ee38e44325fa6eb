//! Output format value object

use serde::{Deserialize, Serialize};

/// How a council verdict is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every section: classification, rounds, fusion, landscape, proof
    Full,
    /// Verdict and confidence only
    #[default]
    Verdict,
    /// The envelope as JSON
    Json,
}
