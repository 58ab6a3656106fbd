//! # ROM Images
//!
//! A ROM image is the ordered list of words read from a text dump, one word
//! per line. Blank lines are skipped and do not consume an address.

use crate::error::{Result, SpecError};
use crate::word::{RomKind, RomWord};
use std::fs;
use std::path::Path;

/// Validated contents of one ROM dump
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rom {
    pub kind: RomKind,
    /// Word at index `n` is stored at address `n`
    pub words: Vec<RomWord>,
}

impl Rom {
    pub fn new(kind: RomKind, words: Vec<RomWord>) -> Self {
        Rom { kind, words }
    }

    /// Parse a text dump
    ///
    /// Every non-blank line, after trimming, must be exactly one word of
    /// `kind`. Errors carry the 1-based physical line number.
    pub fn parse(kind: RomKind, text: &str) -> Result<Self> {
        let width = kind.word_bits();
        let mut words = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let word = RomWord::new(line, width).map_err(|source| SpecError::InvalidLine {
                line: line_num + 1,
                source,
            })?;
            words.push(word);
        }

        let depth = kind.layout().depth;
        if words.len() > depth {
            tracing::warn!(
                "{} dump holds {} words, physical ROM has {}",
                kind,
                words.len(),
                depth
            );
        }

        Ok(Rom { kind, words })
    }

    /// Read and parse a text dump from disk
    pub fn load(kind: RomKind, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let rom = Self::parse(kind, &text)?;
        tracing::debug!("loaded {} words of {} from {}", rom.len(), kind, path.display());
        Ok(rom)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word stored at `address`
    pub fn get(&self, address: usize) -> Option<&RomWord> {
        self.words.get(address)
    }

    /// `(address, word)` pairs in address order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RomWord)> + '_ {
        self.words.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordError;
    use std::io::Write;

    #[test]
    fn test_parse_simple() {
        let text = "00000000000000000\n11100000000000000\n";
        let rom = Rom::parse(RomKind::Microcode, text).unwrap();
        assert_eq!(rom.len(), 2);
        assert_eq!(rom.get(1).unwrap().as_str(), "11100000000000000");
        assert!(rom.get(2).is_none());
    }

    #[test]
    fn test_blank_lines_do_not_consume_addresses() {
        let text = "\n00000000000000001\n\n   \n00000000000000010\r\n\t\n00000000000000011";
        let rom = Rom::parse(RomKind::Microcode, text).unwrap();
        let addresses: Vec<_> = rom.iter().map(|(addr, _)| addr).collect();
        assert_eq!(addresses, [0, 1, 2]);
        assert_eq!(rom.words[2].as_str(), "00000000000000011");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let rom = Rom::parse(RomKind::Microcode, "  00000000000000001  \n").unwrap();
        assert_eq!(rom.words[0].as_str(), "00000000000000001");
    }

    #[test]
    fn test_empty_input() {
        let rom = Rom::parse(RomKind::Nanocode, "\n\n").unwrap();
        assert!(rom.is_empty());
    }

    #[test]
    fn test_wrong_length_reports_physical_line() {
        let text = "00000000000000000\n\n0000000000000000\n";
        let err = Rom::parse(RomKind::Microcode, text).unwrap_err();
        match err {
            SpecError::InvalidLine { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(
                    source,
                    WordError::InvalidLength {
                        expected: 17,
                        found: 16
                    }
                );
            }
            other => panic!("Expected InvalidLine error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_binary_character() {
        let text = format!("{}x", "0".repeat(67));
        let err = Rom::parse(RomKind::Nanocode, &text).unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert!(err.to_string().contains("column 68"));
    }

    #[test]
    fn test_kind_mismatch_is_a_length_error() {
        let text = "0".repeat(68);
        assert!(Rom::parse(RomKind::Microcode, &text).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", "1".repeat(17)).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{}", "0".repeat(17)).unwrap();

        let rom = Rom::load(RomKind::Microcode, file.path()).unwrap();
        assert_eq!(rom.len(), 2);
        assert!(rom.words[1].is_zero());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Rom::load(RomKind::Microcode, dir.path().join("microrom.mem")).unwrap_err();
        assert!(matches!(err, SpecError::IoError(_)));
    }

    #[test]
    fn test_oversized_dump_is_accepted() {
        let text = format!("{}\n", "0".repeat(68)).repeat(RomKind::Nanocode.layout().depth + 1);
        let rom = Rom::parse(RomKind::Nanocode, &text).unwrap();
        assert_eq!(rom.len(), 337);
    }
}
