//! # accord-core
//!
//! Foundation crate for the Accord harmony linter.
//! Defines the semantic types, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::AccordConfig;
pub use errors::error_code::AccordErrorCode;
pub use errors::{ConfigError, ParseError, VocabularyError};
pub use types::axis::Axis;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::coordinate::Coordinate;
pub use types::severity::{HarmonyThresholds, Severity};
pub use types::token_bag::TokenBag;
