//! Prompt domain
//!
//! Templates for the round prompts and the verdict synthesis call.

mod template;

pub use template::{PREVIOUS_EXCERPT_CHARS, PromptTemplate};
