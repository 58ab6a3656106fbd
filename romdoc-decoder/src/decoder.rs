//! Field decoder
//!
//! Turns the bits of one field into a [`DecodedField`]. Decoding is total
//! over well-formed input: a pattern missing from a code table decodes to
//! [`romdoc_spec::UNKNOWN`], never to an error. Only a slice of the wrong
//! width or with non-binary characters is rejected.

use crate::error::{DecoderError, Result};
use romdoc_spec::{CodeTable, FieldKind, FieldSpec, RomWord, Signal, SubField};
use serde::Serialize;
use std::fmt;

/// One decoded field of a ROM word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedField {
    pub name: &'static str,
    /// Exact bits sliced from the word
    pub bits: String,
    /// Decoded meaning, empty for raw fields
    pub meaning: String,
}

impl fmt::Display for DecodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.meaning.is_empty() {
            write!(f, "[{}]", self.bits)
        } else {
            write!(f, "[{}] {}", self.bits, self.meaning)
        }
    }
}

/// Decode `bits` as `field`
pub fn decode_field(field: &FieldSpec, bits: &str) -> Result<DecodedField> {
    decode_field_with(field, bits, false)
}

/// Decode `bits` as `field`, optionally appending the field's documented
/// sub-structure as raw `TAG:bits` groups
pub fn decode_field_with(field: &FieldSpec, bits: &str, expand: bool) -> Result<DecodedField> {
    check_bits(field, bits)?;

    let mut meaning = match field.kind {
        FieldKind::Enumerated { table, prefix } => {
            let selector = match prefix {
                Some(n) => bits.get(..n).unwrap_or(bits),
                None => bits,
            };
            decode_enumerated(table, selector).to_string()
        }
        FieldKind::Bitmask {
            signals,
            separator,
            empty,
        } => {
            let names = decode_bitmask(signals, bits);
            if names.is_empty() {
                empty.to_string()
            } else {
                names.join(separator)
            }
        }
        FieldKind::Composite { parts } => decode_parts(parts, bits),
        FieldKind::Raw => String::new(),
    };

    if expand {
        if let Some(detail) = field.detail {
            if !meaning.is_empty() {
                meaning.push(' ');
            }
            meaning.push_str(&decode_parts(detail, bits));
        }
    }

    Ok(DecodedField {
        name: field.name,
        bits: bits.to_string(),
        meaning,
    })
}

/// Exact-match lookup
pub fn decode_enumerated(table: &CodeTable, bits: &str) -> &'static str {
    table.lookup(bits)
}

/// Names of the set signals, in declaration order
pub fn decode_bitmask(signals: &[Signal], bits: &str) -> Vec<&'static str> {
    let bytes = bits.as_bytes();
    signals
        .iter()
        .filter(|signal| bytes.get(signal.bit) == Some(&b'1'))
        .map(|signal| signal.name)
        .collect()
}

/// Render sub-fields as space-separated `TAG:value` pairs
pub fn decode_parts(parts: &[SubField], bits: &str) -> String {
    parts
        .iter()
        .map(|part| {
            let value = bits.get(part.offset..part.end()).unwrap_or("");
            match part.table {
                Some(table) => format!("{}:{}", part.tag, table.lookup(value)),
                None => format!("{}:{}", part.tag, value),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode every field of `word` in schema order
pub fn decode_word(fields: &[FieldSpec], word: &RomWord, expand: bool) -> Result<Vec<DecodedField>> {
    fields
        .iter()
        .map(|field| {
            let bits = word.field(field).ok_or(DecoderError::FieldWidth {
                field: field.name,
                expected: field.width,
                found: word.len().saturating_sub(field.offset).min(field.width),
            })?;
            decode_field_with(field, bits, expand)
        })
        .collect()
}

fn check_bits(field: &FieldSpec, bits: &str) -> Result<()> {
    let found = bits.chars().count();
    if found != field.width {
        return Err(DecoderError::FieldWidth {
            field: field.name,
            expected: field.width,
            found,
        });
    }

    if !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(DecoderError::InvalidBits {
            field: field.name,
            bits: bits.to_string(),
        });
    }

    Ok(())
}
