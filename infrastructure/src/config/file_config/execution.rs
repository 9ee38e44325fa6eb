//! Execution configuration from TOML (`[execution]` section)
//!
//! ```toml
//! [execution]
//! call_timeout_secs = 30
//!
//! [execution.deadlines]
//! override = 60
//! critical = 90
//! elevated = 120
//! routine = 180
//! ```

use council_application::{ExecutionParams, UrgencyDeadlines};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Round deadlines in seconds, per urgency class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeadlinesConfig {
    #[serde(rename = "override")]
    pub override_class: u64,
    pub critical: u64,
    pub elevated: u64,
    pub routine: u64,
}

impl Default for FileDeadlinesConfig {
    fn default() -> Self {
        Self {
            override_class: 60,
            critical: 90,
            elevated: 120,
            routine: 180,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// Timeout for each single lineage call
    pub call_timeout_secs: u64,
    pub deadlines: FileDeadlinesConfig,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        Self {
            call_timeout_secs: 30,
            deadlines: FileDeadlinesConfig::default(),
        }
    }
}

impl FileExecutionConfig {
    pub fn to_params(&self) -> ExecutionParams {
        let d = &self.deadlines;
        ExecutionParams::default()
            .with_call_timeout(Duration::from_secs(self.call_timeout_secs))
            .with_deadlines(UrgencyDeadlines {
                override_class: Duration::from_secs(d.override_class),
                critical: Duration::from_secs(d.critical),
                elevated: Duration::from_secs(d.elevated),
                routine: Duration::from_secs(d.routine),
            })
    }
}
