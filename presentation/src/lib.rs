//! Presentation layer for sovereign-council
//!
//! This crate contains CLI definitions, output formatters
//! and round progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, FormatArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
