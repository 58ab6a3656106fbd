//! Markdown rendering of decoded ROM tables

use crate::generator::TableRow;
use romdoc_spec::RomKind;

const MICROCODE_FIELD_NOTES: &str = r#"- **Next Addr [16:14]**: Controls program flow
  - 000: Sequential execution
  - 001: Conditional branch
  - 010: Jump to subroutine
  - 100: Return from subroutine
  - 101: Jump to computed address
  - 110: Special sequence
  - 111: Exception handling

- **ALU Op [13:11]**: ALU operation selection
  - 000: NOP
  - 001: Logic operations
  - 010: Shift operations
  - 011: Add operations
  - 100: Subtract operations
  - 101: Multiply
  - 110: Divide
  - 111: Special ALU functions

- **Bus Ctrl [10:8]**: Bus operation control
  - 000: Internal operation
  - 001: Memory read
  - 010: Memory write
  - 011: Interrupt acknowledge
  - 100: Special cycle
  - 101: Stack operation
  - 110: Prefetch
  - 111: Exception stack

- **Reg Ctrl [7:4]**: Register operation control
  - Bit 7: Data register operations
  - Bit 6: Address register operations
  - Bit 5: User Stack Pointer operations
  - Bit 4: CCR operations

- **Seq [3:0]**: Sequence control bits
  - Bits [3:2]: Next address selection mode
    - 00: Direct Branch (use dbNma)
    - 01: Select between group 1 or address 1
    - 10: Use address 2
    - 11: Use address 3
  - Bit [1]: Format control
    - 0: Format I (direct branch)
    - 1: Format II (conditional)
  - Bit [0]: IR update control
    - 0: No IR update
    - 1: Update IR from IRC

"#;

const NANOCODE_FIELD_NOTES: &str = r#"- **Bus [67:64]**: Bus operation control
  - 0000: No bus operation
  - 0001: Read cycle
  - 0010: Write cycle
  - 0011: Address strobe
  - 0100: Data strobe
  - 0101: Bus acknowledge
  - 0110: Interrupt acknowledge
  - 0111: Reset sequence

- **Reg Transfer [63:48]**: Register transfer operations
  - reg→abl: Register to address bus low
  - reg→abh: Register to address bus high
  - reg→dbl: Register to data bus low
  - reg→dbh: Register to data bus high
  - abl→reg: Address bus low to register
  - abh→reg: Address bus high to register
  - dbl→reg: Data bus low to register
  - dbh→reg: Data bus high to register

- **ALU [47:32]**: ALU operation control
  - [47:45]: Operation select
    - 000: Pass A
    - 001: Pass B
    - 010: Add
    - 011: Subtract
    - 100: AND
    - 101: OR
    - 110: XOR
    - 111: NOT
  - [44:40]: Source select
  - [39:35]: Destination select
  - [34:32]: Size control

- **Addr [31:16]**: Address unit control
  - [31]: Address unit clock enable
  - [30:29]: AU output control
    - 00: No output
    - 01: AU → DB (data bus)
    - 10: AU → AB (address bus)
    - 11: AU → PC (program counter)
  - [28]: ABDHRECHARGE (address bus high recharge)
  - [27:25]: ATL control (address temp low)
    - 010: DBL → ATL
    - 011: ATL → DBL
    - 100: ABL → ATL
    - 101: ATL → ABL
  - [24:22]: ATH control (address temp high)
    - Similar to ATL but for high bytes
  - [21:19]: AU control (arithmetic unit)
    - 000: No operation
    - 001: +1/+2 (byte/word)
    - 010: -4
    - 011: Load from AB
    - 100: +2
    - 101: +4
    - 110: -2
    - 111: -1/-2 (byte/word)
  - [18:16]: AU input control

- **Misc [15:0]**: Miscellaneous control signals
  - [15]: Update CCR
  - [14]: Update SR
  - [13]: Initialize state
  - [12:0]: Various control signals

"#;

/// Format an address as `0xHHH`
pub fn format_address(address: usize) -> String {
    format!("0x{:03X}", address)
}

/// Column titles in table order
pub fn column_titles(kind: RomKind) -> Vec<String> {
    let word_bits = kind.word_bits();
    let mut titles = vec!["Address".to_string(), "Content".to_string()];
    titles.extend(kind.fields().iter().map(|field| field.header(word_bits)));
    titles.push("Description".to_string());
    titles
}

/// Header row and separator row, each terminated by a newline
pub fn format_header(kind: RomKind) -> String {
    let titles = column_titles(kind);
    let header = format_cells(titles.iter().map(String::as_str));
    let separator = format!(
        "|{}|\n",
        titles
            .iter()
            .map(|title| "-".repeat(title.chars().count() + 2))
            .collect::<Vec<_>>()
            .join("|")
    );
    header + &separator
}

/// One table row, terminated by a newline
pub fn format_row(row: &TableRow) -> String {
    let address = format_address(row.address);
    let fields: Vec<String> = row.fields.iter().map(|field| field.to_string()).collect();

    let cells = std::iter::once(address.as_str())
        .chain(std::iter::once(row.word.as_str()))
        .chain(fields.iter().map(String::as_str))
        .chain(std::iter::once(row.description.as_str()));
    format_cells(cells)
}

/// Header plus every row
pub fn format_table(kind: RomKind, rows: &[TableRow]) -> String {
    let mut output = format_header(kind);
    for row in rows {
        output.push_str(&format_row(row));
    }
    output
}

/// Full markdown document: title, field notes, table
pub fn format_document(kind: RomKind, rows: &[TableRow]) -> String {
    let (title, notes) = match kind {
        RomKind::Microcode => ("Microcode", MICROCODE_FIELD_NOTES),
        RomKind::Nanocode => ("Nanocode", NANOCODE_FIELD_NOTES),
    };

    let mut output = String::new();
    output.push_str(&format!("# Complete {} ROM Contents\n\n", title));
    output.push_str(&format!(
        "This table contains all entries from the {} ROM ({}) with decoded fields.\n",
        kind,
        kind.layout()
    ));
    output.push_str("Each field shows [original bits] followed by decoded meaning.\n\n");
    output.push_str("## Bit Field Descriptions\n\n");
    output.push_str(notes);
    output.push_str(&format_table(kind, rows));
    output
}

fn format_cells<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::DecodedField;

    fn raw(name: &'static str, bits: &str) -> DecodedField {
        DecodedField {
            name,
            bits: bits.to_string(),
            meaning: String::new(),
        }
    }

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(0), "0x000");
        assert_eq!(format_address(0x21), "0x021");
        assert_eq!(format_address(0x3FF), "0x3FF");
        assert_eq!(format_address(0x1000), "0x1000");
    }

    #[test]
    fn test_microcode_header() {
        let header = format_header(RomKind::Microcode);
        let mut lines = header.lines();
        assert_eq!(
            lines.next(),
            Some("| Address | Content | Next Addr [16:14] | ALU Op [13:11] | Bus Ctrl [10:8] | Reg Ctrl [7:4] | Seq [3:0] | Description |")
        );
        let separator = lines.next().unwrap();
        assert!(separator.starts_with("|---------|"));
        assert_eq!(separator.matches('|').count(), 9);
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_nanocode_header() {
        let header = format_header(RomKind::Nanocode);
        assert!(header.starts_with(
            "| Address | Content | Bus [67:64] | Reg Transfer [63:48] | ALU [47:32] | Addr [31:16] | Misc [15:0] | Description |\n"
        ));
    }

    #[test]
    fn test_format_row() {
        let row = TableRow {
            address: 0x21,
            word: "0001".to_string(),
            fields: vec![
                DecodedField {
                    name: "A",
                    bits: "00".to_string(),
                    meaning: "Zero".to_string(),
                },
                raw("B", "01"),
            ],
            description: "Interrupt handling sequence step 1".to_string(),
        };
        assert_eq!(
            format_row(&row),
            "| 0x021 | 0001 | [00] Zero | [01] | Interrupt handling sequence step 1 |\n"
        );
    }

    #[test]
    fn test_document_preamble() {
        let doc = format_document(RomKind::Nanocode, &[]);
        assert!(doc.starts_with("# Complete Nanocode ROM Contents\n\n"));
        assert!(doc.contains("nanocode ROM (336 x 68-bit)"));
        assert!(doc.contains("- **Misc [15:0]**"));
        assert!(doc.ends_with("|\n"));

        let doc = format_document(RomKind::Microcode, &[]);
        assert!(doc.contains("microcode ROM (1024 x 17-bit)"));
        assert!(doc.contains("    - 1: Update IR from IRC\n\n| Address |"));
    }
}
