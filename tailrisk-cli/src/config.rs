//! Analysis configuration for the `report` command.
//!
//! Loaded from a TOML file; every field has a default so a partial file (or
//! none at all) still yields a usable configuration. Command-line flags
//! override whatever the file provides.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tailrisk_core::TiePolicy;

/// Settings that shape a tail report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Tail mass in percent covered by the CVaR figures.
    pub alpha: f64,

    /// How residual weight is assigned across pivot-equal samples.
    pub tie_policy: TiePolicy,

    /// Round reported values to this many decimal places (None = raw).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_digits: Option<i32>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: 5.0,
            tie_policy: TiePolicy::FullPartial,
            round_digits: None,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}
