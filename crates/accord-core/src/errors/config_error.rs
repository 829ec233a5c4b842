//! Configuration loading errors.

use std::path::PathBuf;

use super::error_code::{self, AccordErrorCode};
use super::vocabulary_error::VocabularyError;

/// Errors raised while loading or validating `accord.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("vocabulary override `{token}` names unknown axis `{axis}`")]
    UnknownAxis { token: String, axis: String },

    #[error("severity thresholds must be ascending and non-negative, got {thresholds}")]
    ThresholdOrder { thresholds: String },

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

impl AccordErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse { .. } => error_code::CONFIG_PARSE,
            Self::UnknownAxis { .. } => error_code::CONFIG_UNKNOWN_AXIS,
            Self::ThresholdOrder { .. } => error_code::CONFIG_THRESHOLD_ORDER,
            Self::Vocabulary(e) => e.error_code(),
        }
    }
}
