//! Vocabulary construction errors.

use crate::types::axis::Axis;

use super::error_code::{self, AccordErrorCode};

/// Errors raised while building the vocabulary table.
///
/// These signal a defect in the backing data (built-in table or config
/// extension) and are never recovered: construction fails fast, before any
/// lookup can observe an inconsistent table.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("token `{token}` mapped to both {first} and {second}")]
    AxisConflict {
        token: String,
        first: Axis,
        second: Axis,
    },

    #[error("empty token in vocabulary source")]
    EmptyToken,
}

impl AccordErrorCode for VocabularyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AxisConflict { .. } => error_code::VOCAB_AXIS_CONFLICT,
            Self::EmptyToken => error_code::VOCAB_EMPTY_TOKEN,
        }
    }
}
