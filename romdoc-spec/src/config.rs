//! # ROM Layout Configuration
//!
//! Geometry of each control store and the check that a field schema tiles a
//! word exactly.

use crate::field::FieldSpec;
use std::fmt;

/// Word width and depth of one ROM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RomLayout {
    /// Bits per word (characters per line in the dump)
    pub word_bits: usize,
    /// Number of words in the physical ROM
    pub depth: usize,
}

impl RomLayout {
    /// Microcode ROM: 1024 x 17-bit
    pub const MICROCODE: Self = Self {
        word_bits: crate::MICROCODE_WORD_BITS,
        depth: crate::MICROCODE_DEPTH,
    };

    /// Nanocode ROM: 336 x 68-bit
    pub const NANOCODE: Self = Self {
        word_bits: crate::NANOCODE_WORD_BITS,
        depth: crate::NANOCODE_DEPTH,
    };

    /// Create a new layout with validation
    pub const fn new(word_bits: usize, depth: usize) -> Result<Self, LayoutError> {
        if word_bits == 0 {
            return Err(LayoutError::ZeroWidth);
        }
        if depth == 0 {
            return Err(LayoutError::ZeroDepth);
        }
        Ok(Self { word_bits, depth })
    }

    /// Highest valid address
    #[inline]
    pub const fn max_address(&self) -> usize {
        self.depth - 1
    }

    /// Total ROM size in bits
    #[inline]
    pub const fn total_bits(&self) -> usize {
        self.word_bits * self.depth
    }

    /// Check that `fields` partitions the word into contiguous, in-order,
    /// non-overlapping ranges covering every bit
    pub fn validate_schema(&self, fields: &[FieldSpec]) -> Result<(), LayoutError> {
        let mut next = 0;
        for field in fields {
            if field.width == 0 {
                return Err(LayoutError::EmptyField(field.name));
            }
            if field.offset != next {
                return Err(LayoutError::Misaligned {
                    field: field.name,
                    expected: next,
                    found: field.offset,
                });
            }
            next = field.end();
            if next > self.word_bits {
                return Err(LayoutError::Overrun {
                    field: field.name,
                    end: next,
                    word_bits: self.word_bits,
                });
            }
        }

        if next != self.word_bits {
            return Err(LayoutError::Uncovered {
                covered: next,
                word_bits: self.word_bits,
            });
        }

        Ok(())
    }
}

impl fmt::Display for RomLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}-bit", self.depth, self.word_bits)
    }
}

/// Layout error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Word width must be non-zero
    ZeroWidth,
    /// Depth must be non-zero
    ZeroDepth,
    /// A field covers no bits
    EmptyField(&'static str),
    /// A field does not start where the previous one ended
    Misaligned {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// A field extends past the end of the word
    Overrun {
        field: &'static str,
        end: usize,
        word_bits: usize,
    },
    /// Fields end before the word does
    Uncovered { covered: usize, word_bits: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::ZeroWidth => write!(f, "word_bits must be non-zero"),
            LayoutError::ZeroDepth => write!(f, "depth must be non-zero"),
            LayoutError::EmptyField(name) => write!(f, "field '{}' has zero width", name),
            LayoutError::Misaligned {
                field,
                expected,
                found,
            } => write!(
                f,
                "field '{}' starts at bit {}, expected {}",
                field, found, expected
            ),
            LayoutError::Overrun {
                field,
                end,
                word_bits,
            } => write!(
                f,
                "field '{}' ends at bit {}, past the {}-bit word",
                field, end, word_bits
            ),
            LayoutError::Uncovered { covered, word_bits } => write!(
                f,
                "fields cover {} of {} bits",
                covered, word_bits
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
