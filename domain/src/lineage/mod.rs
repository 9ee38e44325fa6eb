//! Lineage domain
//!
//! The fixed set of advisory lineages and the per-round response map they produce.

pub mod entities;
pub mod value_objects;

pub use entities::Lineage;
pub use value_objects::{LineageOutcome, LineageResponses, RoundRecord};
