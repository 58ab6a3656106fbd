//! Field schema types
//!
//! A ROM word is split into fields at fixed character offsets. Each field
//! has one of four decode shapes, modelled by [`FieldKind`].

/// Label for a bit pattern missing from an enumerated table
pub const UNKNOWN: &str = "Unknown";

/// Exact-match table from bit pattern to label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTable {
    /// Pattern width in bits
    pub width: usize,
    /// (pattern, label) pairs
    pub codes: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    /// Look up an exact pattern
    pub fn get(&self, bits: &str) -> Option<&'static str> {
        self.codes
            .iter()
            .find(|(pattern, _)| *pattern == bits)
            .map(|(_, label)| *label)
    }

    /// Look up a pattern, falling back to [`UNKNOWN`]
    pub fn lookup(&self, bits: &str) -> &'static str {
        self.get(bits).unwrap_or(UNKNOWN)
    }

    /// All declared labels in table order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codes.iter().map(|(_, label)| *label)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// One named signal of a bitmask field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    /// Character offset within the field
    pub bit: usize,
    pub name: &'static str,
}

/// Fixed sub-range of a composite field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubField {
    /// Short tag printed before the value, e.g. `CLK`
    pub tag: &'static str,
    /// Offset within the parent field
    pub offset: usize,
    pub width: usize,
    /// Decode table; raw bits are shown when absent
    pub table: Option<&'static CodeTable>,
}

impl SubField {
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// Decode shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole value (or its leading `prefix` bits) selects one label
    Enumerated {
        table: &'static CodeTable,
        prefix: Option<usize>,
    },
    /// Each declared bit enables one signal
    Bitmask {
        signals: &'static [Signal],
        separator: &'static str,
        /// Label when no declared signal is set
        empty: &'static str,
    },
    /// Fixed sub-fields rendered as `TAG:value` pairs
    Composite { parts: &'static [SubField] },
    /// Bits shown without decoding
    Raw,
}

/// One named field of a ROM word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Character offset of the first bit
    pub offset: usize,
    pub width: usize,
    pub kind: FieldKind,
    /// Documented sub-structure that the default decode leaves as raw bits
    pub detail: Option<&'static [SubField]>,
}

impl FieldSpec {
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.end()
    }

    /// Hardware bit numbers `(high, low)` for a word of `word_bits`
    pub const fn hardware_bits(&self, word_bits: usize) -> (usize, usize) {
        (word_bits - 1 - self.offset, word_bits - self.end())
    }

    /// Column header, e.g. `Next Addr [16:14]`
    pub fn header(&self, word_bits: usize) -> String {
        let (high, low) = self.hardware_bits(word_bits);
        format!("{} [{}:{}]", self.name, high, low)
    }
}
