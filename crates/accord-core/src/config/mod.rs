//! Configuration for the Accord linter.
//!
//! Everything is optional: an absent `accord.toml` means defaults
//! everywhere. Config is loaded once at startup and validated eagerly —
//! an unknown axis name or a non-ascending threshold set fails before any
//! analysis starts.

pub mod accord_config;
pub mod scan_config;

pub use accord_config::{AccordConfig, ThresholdOverrides};
pub use scan_config::ScanConfig;
