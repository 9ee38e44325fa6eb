//! Load-shedding rest state

use crate::util::round_to;
use serde::{Deserialize, Serialize};

/// Load at or above which rest mode is active
pub const REST_LOAD_THRESHOLD: f64 = 0.80;

/// Fraction of load credited while resting
pub const REST_CONSTANT: f64 = 0.142;

/// Whether the council is resting under the current external load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestDecision {
    pub active: bool,
    pub rest_constant: f64,
    pub load: f64,
    /// `load × 0.142` when active, otherwise 0
    pub credit: f64,
}

impl RestDecision {
    pub fn check(load: f64) -> Self {
        let active = load >= REST_LOAD_THRESHOLD;
        Self {
            active,
            rest_constant: REST_CONSTANT,
            load,
            credit: if active {
                round_to(load * REST_CONSTANT, 4)
            } else {
                0.0
            },
        }
    }

    pub fn status(&self) -> &'static str {
        if self.active { "RESTING" } else { "ACTIVE" }
    }
}
