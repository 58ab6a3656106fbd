//! ROM word definitions

use crate::annotation::{AnnotationTable, MICROCODE_ANNOTATIONS, NANOCODE_ANNOTATIONS};
use crate::config::RomLayout;
use crate::error::WordError;
use crate::field::FieldSpec;
use crate::schema::{MICROCODE_FIELDS, NANOCODE_FIELDS};
use std::fmt;

/// Which control store a word belongs to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RomKind {
    Microcode,
    Nanocode,
}

impl RomKind {
    pub const ALL: [RomKind; 2] = [RomKind::Microcode, RomKind::Nanocode];

    #[inline]
    pub const fn layout(self) -> RomLayout {
        match self {
            RomKind::Microcode => RomLayout::MICROCODE,
            RomKind::Nanocode => RomLayout::NANOCODE,
        }
    }

    #[inline]
    pub const fn word_bits(self) -> usize {
        self.layout().word_bits
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            RomKind::Microcode => MICROCODE_FIELDS,
            RomKind::Nanocode => NANOCODE_FIELDS,
        }
    }

    pub fn annotations(self) -> &'static AnnotationTable {
        match self {
            RomKind::Microcode => &MICROCODE_ANNOTATIONS,
            RomKind::Nanocode => &NANOCODE_ANNOTATIONS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RomKind::Microcode => "microcode",
            RomKind::Nanocode => "nanocode",
        }
    }
}

impl fmt::Display for RomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One stored control word, as the `0`/`1` string found in the dump
///
/// Construction guarantees the string is binary. The width is
/// checked against the caller's expectation, so a `RomWord` built for a
/// given [`RomKind`] always has that kind's word width.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RomWord {
    bits: String,
}

impl RomWord {
    /// Validate `text` as a word of exactly `width` bits
    pub fn new(text: &str, width: usize) -> Result<Self, WordError> {
        let found = text.chars().count();
        if found != width {
            return Err(WordError::InvalidLength {
                expected: width,
                found,
            });
        }

        if let Some((index, c)) = text.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
            return Err(WordError::InvalidCharacter {
                column: index + 1,
                found: c,
            });
        }

        Ok(Self {
            bits: text.to_string(),
        })
    }

    /// Validate `text` as a word of the given ROM kind
    pub fn for_kind(text: &str, kind: RomKind) -> Result<Self, WordError> {
        Self::new(text, kind.word_bits())
    }

    /// All-zero word of `width` bits
    pub fn zero(width: usize) -> Self {
        Self {
            bits: "0".repeat(width),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits `[offset, offset + width)`, or `None` if out of range
    pub fn slice(&self, offset: usize, width: usize) -> Option<&str> {
        self.bits.get(offset..offset.checked_add(width)?)
    }

    /// Bits covered by `field`
    pub fn field(&self, field: &FieldSpec) -> Option<&str> {
        self.slice(field.offset, field.width)
    }

    pub fn is_zero(&self) -> bool {
        self.bits.bytes().all(|b| b == b'0')
    }

    pub fn count_ones(&self) -> usize {
        self.bits.bytes().filter(|&b| b == b'1').count()
    }
}

impl fmt::Display for RomWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

impl AsRef<str> for RomWord {
    fn as_ref(&self) -> &str {
        &self.bits
    }
}
