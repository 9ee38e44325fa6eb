//! Configuration file loading for sovereign-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_` prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml` or `./.council.toml`
//! 4. Global: `$XDG_CONFIG_HOME/sovereign-council/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDeadlinesConfig, FileExecutionConfig, FileGridConfig, FileGridReading,
    FileLoggingConfig, FileOutputConfig, FileProfileConfig, FileProviderConfig,
    FileProvidersConfig,
};
pub use loader::ConfigLoader;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(Box<figment::Error>),

    #[error("Unknown grid region: {0}")]
    UnknownRegion(String),
}
