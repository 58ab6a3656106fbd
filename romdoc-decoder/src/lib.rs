//! # FX68K ROM Table Decoder
//!
//! Decode FX68K microcode and nanocode ROM dumps into markdown tables.
//!
//! Every field of every word is decoded independently against the static
//! schemas in [`romdoc_spec`]. Unassigned patterns decode to `Unknown`;
//! addresses without a known purpose fall back to `Unused/Reserved` or a
//! generic label.
//!
//! ## Example
//!
//! ```rust
//! use romdoc_spec::{Rom, RomKind};
//! use romdoc_decoder::{generate_rows, GeneratorConfig};
//!
//! let rom = Rom::parse(RomKind::Microcode, "00000000000000000\n00000000010100000\n").unwrap();
//! let rows = generate_rows(&rom, &GeneratorConfig::default()).unwrap();
//!
//! assert_eq!(rows[1].fields[3].to_string(), "[1010] Data/USP");
//! assert_eq!(rows[0].description, "Reset entry point - Initialize system state");
//! ```

pub mod decoder;
pub mod error;
pub mod formatter;
pub mod generator;

pub use decoder::{decode_field, decode_word, DecodedField};
pub use error::{DecoderError, Result};
pub use formatter::{format_document, format_row, format_table};
pub use generator::{
    decode_row, generate_document, generate_rows, generate_tables, render_documents, Documents,
    GeneratorConfig, RomTables, TableRow,
};
