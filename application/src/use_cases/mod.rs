//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fuse_verdict;
pub mod run_council;
pub mod run_rounds;

#[cfg(test)]
pub(crate) mod testing;
