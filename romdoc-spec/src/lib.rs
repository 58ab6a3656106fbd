//! # FX68K ROM Specification
//!
//! Word formats, field schemas and address annotations for the two control
//! stores of the FX68K core.
//!
//! ## ROM Geometry
//! - Microcode ROM: 1024 words x 17 bits
//! - Nanocode ROM: 336 words x 68 bits
//!
//! ## Bit Numbering
//!
//! ROM dumps store one word per line as a string of `0`/`1` characters with
//! the most significant hardware bit first. Every field offset in this crate
//! is a character offset into that string, so offset 0 is hardware bit
//! `word_bits - 1`. [`FieldSpec::hardware_bits`] converts back.

pub mod annotation;
pub mod config;
pub mod error;
pub mod field;
pub mod rom;
pub mod schema;
pub mod word;

pub use annotation::{Annotation, AnnotationTable, MICROCODE_ANNOTATIONS, NANOCODE_ANNOTATIONS};
pub use config::{LayoutError, RomLayout};
pub use error::{Result, SpecError, WordError};
pub use field::{CodeTable, FieldKind, FieldSpec, Signal, SubField, UNKNOWN};
pub use rom::Rom;
pub use schema::{MICROCODE_FIELDS, NANOCODE_FIELDS};
pub use word::{RomKind, RomWord};

/// Microcode word width in bits
pub const MICROCODE_WORD_BITS: usize = 17;

/// Microcode ROM depth in words
pub const MICROCODE_DEPTH: usize = 1024;

/// Nanocode word width in bits
pub const NANOCODE_WORD_BITS: usize = 68;

/// Nanocode ROM depth in words
pub const NANOCODE_DEPTH: usize = 336;
