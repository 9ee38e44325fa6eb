//! Infrastructure layer for sovereign-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileExecutionConfig, FileGridConfig, FileLoggingConfig,
    FileOutputConfig, FileProfileConfig, FileProviderConfig, FileProvidersConfig,
};
pub use logging::JsonlRoundLogger;
pub use providers::{ProviderAdapter, ProviderKind, router::LineageRouter};
