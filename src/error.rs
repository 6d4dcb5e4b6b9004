//! Error types for lexstyle

use thiserror::Error;

use crate::language::LanguageId;

/// Result type alias for lexstyle operations
pub type Result<T> = std::result::Result<T, StyleError>;

/// Style registry and dispatch error types
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("No color slot {key} for {language}")]
    NotFound { language: LanguageId, key: String },

    #[error("Slot count mismatch: expected {expected}, got {actual}")]
    CardinalityMismatch { expected: usize, actual: usize },

    #[error("Slot {index} breaks foreground/background pairing")]
    BrokenPairing { index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No lexer configuration for {0}")]
    UnsupportedLanguage(LanguageId),
}

impl StyleError {
    pub(crate) fn not_found(language: LanguageId, key: impl ToString) -> Self {
        StyleError::NotFound {
            language,
            key: key.to_string(),
        }
    }
}
