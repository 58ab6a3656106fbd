//! Field schemas for the microcode and nanocode words
//!
//! ## Microcode (17 bits)
//! ```text
//! Offset  Bits     Field
//! ──────────────────────────────────────
//! 0-2     [16:14]  Next Addr  (enumerated)
//! 3-5     [13:11]  ALU Op     (enumerated)
//! 6-8     [10:8]   Bus Ctrl   (enumerated)
//! 9-12    [7:4]    Reg Ctrl   (bitmask)
//! 13-16   [3:0]    Seq        (raw)
//! ```
//!
//! ## Nanocode (68 bits)
//! ```text
//! Offset  Bits     Field
//! ──────────────────────────────────────
//! 0-3     [67:64]  Bus           (enumerated)
//! 4-19    [63:48]  Reg Transfer  (bitmask)
//! 20-35   [47:32]  ALU           (enumerated on [47:45])
//! 36-51   [31:16]  Addr          (composite)
//! 52-67   [15:0]   Misc          (raw)
//! ```

use crate::field::{CodeTable, FieldKind, FieldSpec, Signal, SubField};

// ========== Microcode tables ==========

/// Next address control. `011` is unassigned.
pub static MICRO_NEXT_ADDR: CodeTable = CodeTable {
    width: 3,
    codes: &[
        ("000", "Sequential"),
        ("001", "Branch conditional"),
        ("010", "Jump subroutine"),
        ("100", "Return"),
        ("101", "Jump computed"),
        ("110", "Special sequence"),
        ("111", "Exception"),
    ],
};

pub static MICRO_ALU_OP: CodeTable = CodeTable {
    width: 3,
    codes: &[
        ("000", "NOP"),
        ("001", "Logic"),
        ("010", "Shift"),
        ("011", "Add"),
        ("100", "Subtract"),
        ("101", "Multiply"),
        ("110", "Divide"),
        ("111", "Special"),
    ],
};

pub static MICRO_BUS_CTRL: CodeTable = CodeTable {
    width: 3,
    codes: &[
        ("000", "Internal"),
        ("001", "Memory read"),
        ("010", "Memory write"),
        ("011", "Int ack"),
        ("100", "Special"),
        ("101", "Stack"),
        ("110", "Prefetch"),
        ("111", "Exception"),
    ],
};

pub static REG_CTRL_SIGNALS: [Signal; 4] = [
    Signal { bit: 0, name: "Data" },
    Signal { bit: 1, name: "Addr" },
    Signal { bit: 2, name: "USP" },
    Signal { bit: 3, name: "CCR" },
];

/// Seq [3:0]: next address select, format, IR update
pub static SEQ_PARTS: [SubField; 3] = [
    SubField { tag: "Sel", offset: 0, width: 2, table: None },
    SubField { tag: "Fmt", offset: 2, width: 1, table: None },
    SubField { tag: "IRU", offset: 3, width: 1, table: None },
];

pub static MICROCODE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "Next Addr",
        offset: 0,
        width: 3,
        kind: FieldKind::Enumerated { table: &MICRO_NEXT_ADDR, prefix: None },
        detail: None,
    },
    FieldSpec {
        name: "ALU Op",
        offset: 3,
        width: 3,
        kind: FieldKind::Enumerated { table: &MICRO_ALU_OP, prefix: None },
        detail: None,
    },
    FieldSpec {
        name: "Bus Ctrl",
        offset: 6,
        width: 3,
        kind: FieldKind::Enumerated { table: &MICRO_BUS_CTRL, prefix: None },
        detail: None,
    },
    FieldSpec {
        name: "Reg Ctrl",
        offset: 9,
        width: 4,
        kind: FieldKind::Bitmask {
            signals: &REG_CTRL_SIGNALS,
            separator: "/",
            empty: "No reg",
        },
        detail: None,
    },
    FieldSpec {
        name: "Seq",
        offset: 13,
        width: 4,
        kind: FieldKind::Raw,
        detail: Some(&SEQ_PARTS),
    },
];

// ========== Nanocode tables ==========

pub static NANO_BUS: CodeTable = CodeTable {
    width: 4,
    codes: &[
        ("0000", "No bus"),
        ("0001", "Read"),
        ("0010", "Write"),
        ("0011", "Addr strobe"),
        ("0100", "Data strobe"),
        ("0101", "Bus ack"),
        ("0110", "Int ack"),
        ("0111", "Reset"),
    ],
};

/// Only the first 8 of the 16 transfer bits carry a known direction
pub static REG_TRANSFER_SIGNALS: [Signal; 8] = [
    Signal { bit: 0, name: "reg→abl" },
    Signal { bit: 1, name: "reg→abh" },
    Signal { bit: 2, name: "reg→dbl" },
    Signal { bit: 3, name: "reg→dbh" },
    Signal { bit: 4, name: "abl→reg" },
    Signal { bit: 5, name: "abh→reg" },
    Signal { bit: 6, name: "dbl→reg" },
    Signal { bit: 7, name: "dbh→reg" },
];

/// ALU operation select, [47:45]
pub static NANO_ALU_OP: CodeTable = CodeTable {
    width: 3,
    codes: &[
        ("000", "Pass A"),
        ("001", "Pass B"),
        ("010", "Add"),
        ("011", "Sub"),
        ("100", "AND"),
        ("101", "OR"),
        ("110", "XOR"),
        ("111", "NOT"),
    ],
};

/// ALU [44:32]: source select, destination select, size control
pub static ALU_SELECT_PARTS: [SubField; 3] = [
    SubField { tag: "Src", offset: 3, width: 5, table: None },
    SubField { tag: "Dst", offset: 8, width: 5, table: None },
    SubField { tag: "Size", offset: 13, width: 3, table: None },
];

/// AU output control, [30:29]
pub static AU_OUTPUT: CodeTable = CodeTable {
    width: 2,
    codes: &[
        ("00", "No output"),
        ("01", "AU→DB"),
        ("10", "AU→AB"),
        ("11", "AU→PC"),
    ],
};

/// AU arithmetic control, [21:19]
pub static AU_CONTROL: CodeTable = CodeTable {
    width: 3,
    codes: &[
        ("000", "NOP"),
        ("001", "+1/+2"),
        ("010", "-4"),
        ("011", "Load AB"),
        ("100", "+2"),
        ("101", "+4"),
        ("110", "-2"),
        ("111", "-1/-2"),
    ],
};

/// Address unit control, [31:16]
pub static ADDRESS_UNIT_PARTS: [SubField; 7] = [
    SubField { tag: "CLK", offset: 0, width: 1, table: None },
    SubField { tag: "Out", offset: 1, width: 2, table: Some(&AU_OUTPUT) },
    SubField { tag: "RCH", offset: 3, width: 1, table: None },
    // ATL/ATH have documented encodings but are shown raw
    SubField { tag: "ATL", offset: 4, width: 3, table: None },
    SubField { tag: "ATH", offset: 7, width: 3, table: None },
    SubField { tag: "AU", offset: 10, width: 3, table: Some(&AU_CONTROL) },
    SubField { tag: "In", offset: 13, width: 3, table: None },
];

pub static NANOCODE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "Bus",
        offset: 0,
        width: 4,
        kind: FieldKind::Enumerated { table: &NANO_BUS, prefix: None },
        detail: None,
    },
    FieldSpec {
        name: "Reg Transfer",
        offset: 4,
        width: 16,
        kind: FieldKind::Bitmask {
            signals: &REG_TRANSFER_SIGNALS,
            separator: ", ",
            empty: "No transfer",
        },
        detail: None,
    },
    FieldSpec {
        name: "ALU",
        offset: 20,
        width: 16,
        kind: FieldKind::Enumerated { table: &NANO_ALU_OP, prefix: Some(3) },
        detail: Some(&ALU_SELECT_PARTS),
    },
    FieldSpec {
        name: "Addr",
        offset: 36,
        width: 16,
        kind: FieldKind::Composite { parts: &ADDRESS_UNIT_PARTS },
        detail: None,
    },
    FieldSpec {
        name: "Misc",
        offset: 52,
        width: 16,
        kind: FieldKind::Raw,
        detail: None,
    },
];
