//! # Error Types for ROM Loading

use thiserror::Error;

/// A single stored word failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected {expected} bits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("invalid character {found:?} at column {column} (expected '0' or '1')")]
    InvalidCharacter { column: usize, found: char },
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Invalid ROM word on line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: WordError,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SpecError {
    /// 1-based physical line number of the offending input, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            SpecError::InvalidLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
