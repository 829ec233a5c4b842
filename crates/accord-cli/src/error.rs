//! CLI error type and exit-code mapping.
//!
//! Exit codes:
//! - 0: clean run
//! - 1: findings at or above `--fail-on`
//! - 2: fatal error — bad config, conflicting vocabulary, grammar failure

use accord_core::errors::{AccordErrorCode, ConfigError, ParseError, VocabularyError};

const CLI_IO: &str = "CLI_IO";

/// Anything that aborts the run before or during analysis.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    /// Grammar bootstrap failure; per-file parse errors never surface here.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl AccordErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Vocabulary(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Io(_) => CLI_IO,
        }
    }
}
