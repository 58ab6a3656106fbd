//! Address annotations for known control words
//!
//! Lookup order: exact address, then inclusive address range, then the
//! all-zero check, then the table's generic label.

use crate::word::RomWord;
use std::fmt;

/// Description of an unmapped all-zero word
pub const UNUSED: &str = "Unused/Reserved";

/// Description attached to a single address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactAnnotation {
    pub address: usize,
    pub text: &'static str,
}

/// Description attached to an inclusive address range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeAnnotation {
    pub start: usize,
    pub end: usize,
    pub label: &'static str,
}

impl RangeAnnotation {
    #[inline]
    pub const fn contains(&self, address: usize) -> bool {
        address >= self.start && address <= self.end
    }
}

/// Resolved description of one ROM address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Exact(&'static str),
    /// `offset` is `address - start` of the matching range
    Range { label: &'static str, offset: usize },
    Unused,
    Generic(&'static str),
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Exact(text) => f.write_str(text),
            Annotation::Range { label, offset } => write!(f, "{} step {}", label, offset),
            Annotation::Unused => f.write_str(UNUSED),
            Annotation::Generic(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationTable {
    pub exact: &'static [ExactAnnotation],
    /// Ordered and non-overlapping
    pub ranges: &'static [RangeAnnotation],
    /// Label for mapped-out, non-zero words
    pub generic: &'static str,
}

impl AnnotationTable {
    /// Resolve the description for `word` stored at `address`
    pub fn resolve(&self, address: usize, word: &RomWord) -> Annotation {
        if let Some(entry) = self.exact.iter().find(|e| e.address == address) {
            return Annotation::Exact(entry.text);
        }

        if let Some(range) = self.ranges.iter().find(|r| r.contains(address)) {
            return Annotation::Range {
                label: range.label,
                offset: address - range.start,
            };
        }

        if word.is_zero() {
            Annotation::Unused
        } else {
            Annotation::Generic(self.generic)
        }
    }
}

pub static MICROCODE_ANNOTATIONS: AnnotationTable = AnnotationTable {
    exact: &[
        ExactAnnotation { address: 0x000, text: "Reset entry point - Initialize system state" },
        ExactAnnotation { address: 0x001, text: "Setup supervisor mode" },
        ExactAnnotation { address: 0x002, text: "Load initial PC from reset vector" },
        ExactAnnotation { address: 0x003, text: "Load initial SR" },
        ExactAnnotation { address: 0x004, text: "Start normal execution" },
    ],
    ranges: &[
        RangeAnnotation { start: 0x020, end: 0x024, label: "Interrupt handling sequence" },
        RangeAnnotation { start: 0x040, end: 0x044, label: "Bus error handling sequence" },
        RangeAnnotation { start: 0x120, end: 0x123, label: "MOVE.W register sequence" },
        RangeAnnotation { start: 0x140, end: 0x144, label: "MOVE.L memory sequence" },
        RangeAnnotation { start: 0x180, end: 0x183, label: "ADD operation sequence" },
        RangeAnnotation { start: 0x200, end: 0x203, label: "MOVEM sequence" },
    ],
    generic: "Standard execution step",
};

pub static NANOCODE_ANNOTATIONS: AnnotationTable = AnnotationTable {
    exact: &[
        ExactAnnotation { address: 0x000, text: "Initial reset state" },
        ExactAnnotation { address: 0x001, text: "NOP/Reset state" },
        ExactAnnotation { address: 0x004, text: "Memory read setup" },
        ExactAnnotation { address: 0x010, text: "ALU operation control" },
        ExactAnnotation { address: 0x020, text: "Register-to-register transfer" },
        ExactAnnotation { address: 0x045, text: "ADD operation control" },
        ExactAnnotation { address: 0x080, text: "Memory write setup" },
        ExactAnnotation { address: 0x100, text: "Address increment" },
        ExactAnnotation { address: 0x120, text: "CCR update" },
        ExactAnnotation { address: 0x140, text: "Stack operation" },
        ExactAnnotation { address: 0x180, text: "Exception entry" },
        ExactAnnotation { address: 0x200, text: "Interrupt acknowledge" },
    ],
    ranges: &[],
    generic: "Standard control word",
};
