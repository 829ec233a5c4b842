//! Top-level `accord.toml` configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::axis::Axis;
use crate::types::severity::HarmonyThresholds;

use super::scan_config::ScanConfig;

/// Partial threshold overrides; unset boundaries keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub harmonious: Option<f64>,
    pub low: Option<f64>,
    pub medium: Option<f64>,
    pub high: Option<f64>,
}

/// The whole config file.
///
/// ```toml
/// [thresholds]
/// high = 1.0
///
/// [vocabulary]
/// reticulate = "mutation"
///
/// [scan]
/// max_file_size = 524288
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AccordConfig {
    pub thresholds: ThresholdOverrides,
    /// token → axis name; extends (and may override) the built-in table.
    pub vocabulary: BTreeMap<String, String>,
    pub scan: ScanConfig,
}

impl AccordConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve thresholds: defaults overlaid with any overrides, validated.
    pub fn effective_thresholds(&self) -> Result<HarmonyThresholds, ConfigError> {
        let d = HarmonyThresholds::DEFAULT;
        HarmonyThresholds::validated(
            self.thresholds.harmonious.unwrap_or(d.harmonious),
            self.thresholds.low.unwrap_or(d.low),
            self.thresholds.medium.unwrap_or(d.medium),
            self.thresholds.high.unwrap_or(d.high),
        )
    }

    /// Resolve vocabulary overrides into typed entries.
    ///
    /// Tokens are lowercased here so overrides obey the same case rules as
    /// the built-in table.
    pub fn vocabulary_entries(&self) -> Result<Vec<(String, Axis)>, ConfigError> {
        self.vocabulary
            .iter()
            .map(|(token, axis_name)| {
                let axis =
                    Axis::from_name(axis_name).ok_or_else(|| ConfigError::UnknownAxis {
                        token: token.clone(),
                        axis: axis_name.clone(),
                    })?;
                Ok((token.to_lowercase(), axis))
            })
            .collect()
    }
}
