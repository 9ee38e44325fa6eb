//! Grid baselines from TOML (`[grid]` section)
//!
//! Static load/price readings per named region. Extra regions can be added
//! under `[grid.regions.<NAME>]`.

use crate::config::ConfigError;
use council_application::GridReading;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FileGridReading {
    pub load: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGridConfig {
    /// Region used when none is given on the command line
    pub default_region: String,
    pub regions: BTreeMap<String, FileGridReading>,
}

impl Default for FileGridConfig {
    fn default() -> Self {
        let regions = [
            ("CAISO", 0.72, 0.14),
            ("PJM", 0.61, 0.11),
            ("ERCOT", 0.83, 0.17),
            ("US-MISO", 0.58, 0.09),
        ]
        .into_iter()
        .map(|(name, load, price)| (name.to_string(), FileGridReading { load, price }))
        .collect();

        Self {
            default_region: "CAISO".to_string(),
            regions,
        }
    }
}

impl FileGridConfig {
    /// Look up a region by name, ignoring case.
    pub fn reading(&self, region: &str) -> Result<GridReading, ConfigError> {
        self.regions
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(region))
            .map(|(_, r)| GridReading::new(r.load, r.price))
            .ok_or_else(|| ConfigError::UnknownRegion(region.to_string()))
    }

    pub fn default_reading(&self) -> Result<GridReading, ConfigError> {
        self.reading(&self.default_region)
    }

    pub fn region_names(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }
}
