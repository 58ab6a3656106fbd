//! Decoder errors

use romdoc_spec::{RomKind, SpecError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecoderError {
    #[error("Field '{field}' expects {expected} bits, got {found}")]
    FieldWidth {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Field '{field}' has non-binary bits: {bits:?}")]
    InvalidBits { field: &'static str, bits: String },

    #[error("Expected a {expected} ROM, got {found}")]
    KindMismatch { expected: RomKind, found: RomKind },

    #[error(transparent)]
    Spec(#[from] SpecError),
}

pub type Result<T> = std::result::Result<T, DecoderError>;
