//! Per-file parse errors.
//!
//! A parse error aborts the file it occurred in, never the run. Unclassified
//! syntax inside an otherwise valid tree is NOT an error — the reducer maps
//! it to a neutral marker token and continues.

use super::error_code::{self, AccordErrorCode};

/// Errors that can occur while producing a syntax tree for one file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("tree-sitter grammar rejected: {message}")]
    Grammar { message: String },

    #[error("{file} is not valid UTF-8")]
    InvalidUtf8 { file: String },

    #[error("no syntax tree could be produced for {file}")]
    TreeUnavailable { file: String },
}

impl AccordErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Grammar { .. } => error_code::PARSE_GRAMMAR,
            Self::InvalidUtf8 { .. } => error_code::PARSE_INVALID_UTF8,
            Self::TreeUnavailable { .. } => error_code::PARSE_TREE_UNAVAILABLE,
        }
    }
}
