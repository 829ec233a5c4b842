//! CLI command handlers.

pub mod analyze;
pub mod vocab;

use std::path::{Path, PathBuf};

use accord_analysis::vocabulary::Vocabulary;
use accord_core::AccordConfig;

use crate::error::CliError;

/// Load config from an explicit path, or `./accord.toml` when present.
pub fn load_config(explicit: Option<&Path>) -> Result<AccordConfig, CliError> {
    match explicit {
        Some(path) => Ok(AccordConfig::load(path)?),
        None => {
            let default = PathBuf::from("accord.toml");
            if default.is_file() {
                Ok(AccordConfig::load(&default)?)
            } else {
                Ok(AccordConfig::default())
            }
        }
    }
}

/// The built-in table extended with config overrides.
pub fn effective_vocabulary(config: &AccordConfig) -> Result<Vocabulary, CliError> {
    let overrides = config.vocabulary_entries()?;
    Ok(Vocabulary::default_table().extend(overrides)?)
}
