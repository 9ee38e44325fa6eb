//! Proof stamp - audit fingerprint of a fused request
//!
//! Not a security control. The issue time is part of the digest and is also
//! stored in the stamp, so the digest can be recomputed from the same
//! responses, status and `issued_at_ms`.

use crate::fusion::FusionStatus;
use crate::lineage::LineageResponses;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Characters of each lineage's rendered outcome fed into the digest
const EXCERPT_CHARS: usize = 50;

/// Fingerprint over the final responses and fusion status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStamp {
    /// Full SHA-256 digest, lowercase hex (64 chars)
    pub digest: String,
    /// First 8 and last 8 hex characters
    pub short: String,
    /// `SO-<unix seconds>-<first 6 hex>`
    pub session_id: String,
    /// Issue time, milliseconds since the Unix epoch
    pub issued_at_ms: u64,
}

impl ProofStamp {
    /// Stamp with the current wall-clock time.
    pub fn issue(responses: &LineageResponses, status: FusionStatus) -> Self {
        Self::issue_at(responses, status, current_timestamp_ms())
    }

    /// Stamp with an explicit issue time.
    pub fn issue_at(responses: &LineageResponses, status: FusionStatus, issued_at_ms: u64) -> Self {
        let digest = compute_digest(responses, status, issued_at_ms);
        let short = format!("{}...{}", &digest[..8], &digest[digest.len() - 8..]);
        let session_id = format!("SO-{}-{}", issued_at_ms / 1000, &digest[..6]);

        Self {
            digest,
            short,
            session_id,
            issued_at_ms,
        }
    }

    /// Recompute the digest and compare.
    pub fn verify(&self, responses: &LineageResponses, status: FusionStatus) -> bool {
        compute_digest(responses, status, self.issued_at_ms) == self.digest
    }
}

fn compute_digest(responses: &LineageResponses, status: FusionStatus, issued_at_ms: u64) -> String {
    let mut hasher = Sha256::new();
    for (lineage, outcome) in responses.iter() {
        let excerpt: String = outcome.render(lineage).chars().take(EXCERPT_CHARS).collect();
        hasher.update(lineage.as_str().as_bytes());
        hasher.update(b"=");
        hasher.update(excerpt.as_bytes());
        hasher.update(b"\n");
    }
    hasher.update(format!("s={}\nt={}", status, issued_at_ms).as_bytes());
    hex::encode(hasher.finalize())
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
