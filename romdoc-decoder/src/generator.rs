//! Table generation
//!
//! Each row is a pure function of `(address, word)`, so rows are produced by
//! a single in-order pass over the ROM.

use crate::decoder::{decode_word, DecodedField};
use crate::error::{DecoderError, Result};
use crate::formatter::format_document;
use romdoc_spec::{Rom, RomKind, RomWord};
use serde::Serialize;

/// Generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Append the documented raw sub-fields of Seq and the nanocode ALU
    /// selects. Off reproduces the plain tables.
    pub expand_subfields: bool,
}

/// One decoded ROM entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub address: usize,
    /// Raw stored word
    pub word: String,
    /// One entry per schema field, in schema order
    pub fields: Vec<DecodedField>,
    pub description: String,
}

/// Decoded rows of both ROMs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomTables {
    pub microcode: Vec<TableRow>,
    pub nanocode: Vec<TableRow>,
}

/// Rendered markdown documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documents {
    pub microcode: String,
    pub nanocode: String,
}

/// Decode the word stored at `address`
pub fn decode_row(
    kind: RomKind,
    address: usize,
    word: &RomWord,
    config: &GeneratorConfig,
) -> Result<TableRow> {
    let fields = decode_word(kind.fields(), word, config.expand_subfields)?;
    let description = kind.annotations().resolve(address, word).to_string();

    Ok(TableRow {
        address,
        word: word.as_str().to_string(),
        fields,
        description,
    })
}

/// Decode every word of `rom`, in address order
pub fn generate_rows(rom: &Rom, config: &GeneratorConfig) -> Result<Vec<TableRow>> {
    let rows = rom
        .iter()
        .map(|(address, word)| decode_row(rom.kind, address, word, config))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("decoded {} {} rows", rows.len(), rom.kind);
    Ok(rows)
}

/// Decode both ROMs
pub fn generate_tables(
    microcode: &Rom,
    nanocode: &Rom,
    config: &GeneratorConfig,
) -> Result<RomTables> {
    expect_kind(microcode, RomKind::Microcode)?;
    expect_kind(nanocode, RomKind::Nanocode)?;

    Ok(RomTables {
        microcode: generate_rows(microcode, config)?,
        nanocode: generate_rows(nanocode, config)?,
    })
}

/// Render both documents from decoded tables
pub fn render_documents(tables: &RomTables) -> Documents {
    Documents {
        microcode: format_document(RomKind::Microcode, &tables.microcode),
        nanocode: format_document(RomKind::Nanocode, &tables.nanocode),
    }
}

/// Decode and render one ROM as a markdown document
pub fn generate_document(rom: &Rom, config: &GeneratorConfig) -> Result<String> {
    let rows = generate_rows(rom, config)?;
    Ok(format_document(rom.kind, &rows))
}

fn expect_kind(rom: &Rom, expected: RomKind) -> Result<()> {
    if rom.kind != expected {
        return Err(DecoderError::KindMismatch {
            expected,
            found: rom.kind,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn micro_rom(words: &[&str]) -> Rom {
        Rom::parse(RomKind::Microcode, &words.join("\n")).unwrap()
    }

    #[test]
    fn test_reset_entry_row() {
        let word = RomWord::zero(17);
        let row = decode_row(RomKind::Microcode, 0, &word, &GeneratorConfig::default()).unwrap();

        let rendered: Vec<_> = row.fields.iter().map(|f| f.to_string()).collect();
        assert_eq!(rendered[0], "[000] Sequential");
        assert_eq!(rendered[1], "[000] NOP");
        assert_eq!(rendered[2], "[000] Internal");
        assert_eq!(rendered[3], "[0000] No reg");
        assert_eq!(row.description, "Reset entry point - Initialize system state");
    }

    #[test]
    fn test_addresses_are_contiguous() {
        let rom = micro_rom(&[
            "00000000000000000",
            "",
            "11111111111111111",
            "00000000000000001",
        ]);
        let rows = generate_rows(&rom, &GeneratorConfig::default()).unwrap();
        let addresses: Vec<_> = rows.iter().map(|r| r.address).collect();
        assert_eq!(addresses, [0, 1, 2]);
        assert_eq!(rows[1].word, "11111111111111111");
    }

    #[test]
    fn test_fallback_descriptions() {
        let mut words = vec!["00000000000000001"; 5];
        words.push("00000000000000000");
        words.push("00000000000000001");
        let rows = generate_rows(&micro_rom(&words), &GeneratorConfig::default()).unwrap();
        assert_eq!(rows[5].description, "Unused/Reserved");
        assert_eq!(rows[6].description, "Standard execution step");
    }

    #[test]
    fn test_expand_subfields() {
        let rom = micro_rom(&["00000000000001011"]);
        let config = GeneratorConfig {
            expand_subfields: true,
        };
        let rows = generate_rows(&rom, &config).unwrap();
        assert_eq!(rows[0].fields[4].to_string(), "[1011] Sel:10 Fmt:1 IRU:1");

        let rows = generate_rows(&rom, &GeneratorConfig::default()).unwrap();
        assert_eq!(rows[0].fields[4].to_string(), "[1011]");
    }

    #[test]
    fn test_generate_tables_checks_kinds() {
        let micro = micro_rom(&["00000000000000000"]);
        let err = generate_tables(&micro, &micro, &GeneratorConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            DecoderError::KindMismatch {
                expected: RomKind::Nanocode,
                found: RomKind::Microcode
            }
        ));
    }

    #[test]
    fn test_generate_document() {
        let rom = micro_rom(&["00000000000000000", "01000000000000000"]);
        let doc = generate_document(&rom, &GeneratorConfig::default()).unwrap();
        assert!(doc.contains(
            "| 0x001 | 01000000000000000 | [010] Jump subroutine | [000] NOP | [000] Internal | [0000] No reg | [0000] | Setup supervisor mode |\n"
        ));
    }
}
