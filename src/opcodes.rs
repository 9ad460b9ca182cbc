//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table: the single source of truth for how each
//! byte value decodes and what it costs.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked invalid with a "???" mnemonic
//!
//! Cycle counts and penalty flags follow the classic cycle-counting tables used
//! for Atari 2600 and NES work. A few entries are deliberately conservative:
//! `EOR ($zp,X)` and the indexed `STA` forms carry a page-cross penalty even
//! though the hardware never charges one there.

use crate::addressing::AddressingMode;

bitflags::bitflags! {
    /// Conditions under which an instruction may take longer than its base cost.
    ///
    /// The two flags are orthogonal. Conditional branches carry both.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CyclePenalties: u8 {
        /// +1 cycle when the effective address lands on another page.
        const PAGE_CROSS = 1 << 0;
        /// +1 cycle when a conditional branch is taken.
        const BRANCH_TAKEN = 1 << 1;
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use disasm6502::{classify, AddressingMode, CyclePenalties};
///
/// let lda = classify(0xBD);
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda.base_cycles, 4);
/// assert_eq!(lda.penalties, CyclePenalties::PAGE_CROSS);
/// assert_eq!(lda.size_bytes(), 3);
/// assert!(lda.valid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    ///
    /// Illegal opcodes are recorded as `Implicit`; the decoder never looks at
    /// it for them.
    pub addressing_mode: AddressingMode,

    /// Nominal cycle cost before any penalty. Illegal opcodes are 0.
    pub base_cycles: u8,

    /// Cycle-counting exceptions for this opcode.
    pub penalties: CyclePenalties,

    /// Whether this byte is a documented 6502 opcode.
    pub valid: bool,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    ///
    /// Illegal opcodes always occupy a single byte.
    pub const fn size_bytes(&self) -> u8 {
        if self.valid {
            self.addressing_mode.size_bytes()
        } else {
            1
        }
    }
}

const NONE: CyclePenalties = CyclePenalties::empty();
const PAGE: CyclePenalties = CyclePenalties::PAGE_CROSS;
const BRANCH: CyclePenalties = CyclePenalties::PAGE_CROSS.union(CyclePenalties::BRANCH_TAKEN);

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    addressing_mode: AddressingMode::Implicit,
    base_cycles: 0,
    penalties: NONE,
    valid: false,
};

const fn op(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    penalties: CyclePenalties,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        penalties,
        valid: true,
    }
}

/// Returns the metadata for `opcode`.
///
/// Total over all 256 byte values; never panics.
pub const fn classify(opcode: u8) -> OpcodeMetadata {
    OPCODE_TABLE[opcode as usize]
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// ```
/// use disasm6502::OPCODE_TABLE;
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.valid);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;

    [
        /* 0x00 */ op("BRK", Implicit, 7, NONE),
        /* 0x01 */ op("ORA", IndirectX, 6, NONE),
        /* 0x02 */ ILLEGAL,
        /* 0x03 */ ILLEGAL,
        /* 0x04 */ ILLEGAL,
        /* 0x05 */ op("ORA", ZeroPage, 3, NONE),
        /* 0x06 */ op("ASL", ZeroPage, 5, NONE),
        /* 0x07 */ ILLEGAL,
        /* 0x08 */ op("PHP", Implicit, 3, NONE),
        /* 0x09 */ op("ORA", Immediate, 2, NONE),
        /* 0x0A */ op("ASL", Accumulator, 2, NONE),
        /* 0x0B */ ILLEGAL,
        /* 0x0C */ ILLEGAL,
        /* 0x0D */ op("ORA", Absolute, 4, NONE),
        /* 0x0E */ op("ASL", Absolute, 6, NONE),
        /* 0x0F */ ILLEGAL,
        /* 0x10 */ op("BPL", Relative, 2, BRANCH),
        /* 0x11 */ op("ORA", IndirectY, 5, PAGE),
        /* 0x12 */ ILLEGAL,
        /* 0x13 */ ILLEGAL,
        /* 0x14 */ ILLEGAL,
        /* 0x15 */ op("ORA", ZeroPageX, 4, NONE),
        /* 0x16 */ op("ASL", ZeroPageX, 6, NONE),
        /* 0x17 */ ILLEGAL,
        /* 0x18 */ op("CLC", Implicit, 2, NONE),
        /* 0x19 */ op("ORA", AbsoluteY, 4, PAGE),
        /* 0x1A */ ILLEGAL,
        /* 0x1B */ ILLEGAL,
        /* 0x1C */ ILLEGAL,
        /* 0x1D */ op("ORA", AbsoluteX, 4, PAGE),
        /* 0x1E */ op("ASL", AbsoluteX, 7, NONE),
        /* 0x1F */ ILLEGAL,
        /* 0x20 */ op("JSR", Absolute, 6, NONE),
        /* 0x21 */ op("AND", IndirectX, 6, NONE),
        /* 0x22 */ ILLEGAL,
        /* 0x23 */ ILLEGAL,
        /* 0x24 */ op("BIT", ZeroPage, 3, NONE),
        /* 0x25 */ op("AND", ZeroPage, 3, NONE),
        /* 0x26 */ op("ROL", ZeroPage, 5, NONE),
        /* 0x27 */ ILLEGAL,
        /* 0x28 */ op("PLP", Implicit, 4, NONE),
        /* 0x29 */ op("AND", Immediate, 2, NONE),
        /* 0x2A */ op("ROL", Accumulator, 2, NONE),
        /* 0x2B */ ILLEGAL,
        /* 0x2C */ op("BIT", Absolute, 4, NONE),
        /* 0x2D */ op("AND", Absolute, 4, NONE),
        /* 0x2E */ op("ROL", Absolute, 6, NONE),
        /* 0x2F */ ILLEGAL,
        /* 0x30 */ op("BMI", Relative, 2, BRANCH),
        /* 0x31 */ op("AND", IndirectY, 5, PAGE),
        /* 0x32 */ ILLEGAL,
        /* 0x33 */ ILLEGAL,
        /* 0x34 */ ILLEGAL,
        /* 0x35 */ op("AND", ZeroPageX, 4, NONE),
        /* 0x36 */ op("ROL", ZeroPageX, 6, NONE),
        /* 0x37 */ ILLEGAL,
        /* 0x38 */ op("SEC", Implicit, 2, NONE),
        /* 0x39 */ op("AND", AbsoluteY, 4, PAGE),
        /* 0x3A */ ILLEGAL,
        /* 0x3B */ ILLEGAL,
        /* 0x3C */ ILLEGAL,
        /* 0x3D */ op("AND", AbsoluteX, 4, PAGE),
        /* 0x3E */ op("ROL", AbsoluteX, 7, NONE),
        /* 0x3F */ ILLEGAL,
        /* 0x40 */ op("RTI", Implicit, 6, NONE),
        /* 0x41 */ op("EOR", IndirectX, 6, PAGE),
        /* 0x42 */ ILLEGAL,
        /* 0x43 */ ILLEGAL,
        /* 0x44 */ ILLEGAL,
        /* 0x45 */ op("EOR", ZeroPage, 3, NONE),
        /* 0x46 */ op("LSR", ZeroPage, 5, NONE),
        /* 0x47 */ ILLEGAL,
        /* 0x48 */ op("PHA", Implicit, 3, NONE),
        /* 0x49 */ op("EOR", Immediate, 2, NONE),
        /* 0x4A */ op("LSR", Accumulator, 2, NONE),
        /* 0x4B */ ILLEGAL,
        /* 0x4C */ op("JMP", Absolute, 3, NONE),
        /* 0x4D */ op("EOR", Absolute, 4, NONE),
        /* 0x4E */ op("LSR", Absolute, 6, NONE),
        /* 0x4F */ ILLEGAL,
        /* 0x50 */ op("BVC", Relative, 2, BRANCH),
        /* 0x51 */ op("EOR", IndirectY, 5, PAGE),
        /* 0x52 */ ILLEGAL,
        /* 0x53 */ ILLEGAL,
        /* 0x54 */ ILLEGAL,
        /* 0x55 */ op("EOR", ZeroPageX, 4, NONE),
        /* 0x56 */ op("LSR", ZeroPageX, 6, NONE),
        /* 0x57 */ ILLEGAL,
        /* 0x58 */ op("CLI", Implicit, 2, NONE),
        /* 0x59 */ op("EOR", AbsoluteY, 4, PAGE),
        /* 0x5A */ ILLEGAL,
        /* 0x5B */ ILLEGAL,
        /* 0x5C */ ILLEGAL,
        /* 0x5D */ op("EOR", AbsoluteX, 4, PAGE),
        /* 0x5E */ op("LSR", AbsoluteX, 7, NONE),
        /* 0x5F */ ILLEGAL,
        /* 0x60 */ op("RTS", Implicit, 6, NONE),
        /* 0x61 */ op("ADC", IndirectX, 6, NONE),
        /* 0x62 */ ILLEGAL,
        /* 0x63 */ ILLEGAL,
        /* 0x64 */ ILLEGAL,
        /* 0x65 */ op("ADC", ZeroPage, 3, NONE),
        /* 0x66 */ op("ROR", ZeroPage, 5, NONE),
        /* 0x67 */ ILLEGAL,
        /* 0x68 */ op("PLA", Implicit, 4, NONE),
        /* 0x69 */ op("ADC", Immediate, 2, NONE),
        /* 0x6A */ op("ROR", Accumulator, 2, NONE),
        /* 0x6B */ ILLEGAL,
        /* 0x6C */ op("JMP", Indirect, 5, NONE),
        /* 0x6D */ op("ADC", Absolute, 4, NONE),
        /* 0x6E */ op("ROR", Absolute, 6, NONE),
        /* 0x6F */ ILLEGAL,
        /* 0x70 */ op("BVS", Relative, 2, BRANCH),
        /* 0x71 */ op("ADC", IndirectY, 5, PAGE),
        /* 0x72 */ ILLEGAL,
        /* 0x73 */ ILLEGAL,
        /* 0x74 */ ILLEGAL,
        /* 0x75 */ op("ADC", ZeroPageX, 4, NONE),
        /* 0x76 */ op("ROR", ZeroPageX, 6, NONE),
        /* 0x77 */ ILLEGAL,
        /* 0x78 */ op("SEI", Implicit, 2, NONE),
        /* 0x79 */ op("ADC", AbsoluteY, 4, PAGE),
        /* 0x7A */ ILLEGAL,
        /* 0x7B */ ILLEGAL,
        /* 0x7C */ ILLEGAL,
        /* 0x7D */ op("ADC", AbsoluteX, 4, PAGE),
        /* 0x7E */ op("ROR", AbsoluteX, 7, NONE),
        /* 0x7F */ ILLEGAL,
        /* 0x80 */ ILLEGAL,
        /* 0x81 */ op("STA", IndirectX, 6, NONE),
        /* 0x82 */ ILLEGAL,
        /* 0x83 */ ILLEGAL,
        /* 0x84 */ op("STY", ZeroPage, 3, NONE),
        /* 0x85 */ op("STA", ZeroPage, 3, NONE),
        /* 0x86 */ op("STX", ZeroPage, 3, NONE),
        /* 0x87 */ ILLEGAL,
        /* 0x88 */ op("DEY", Implicit, 2, NONE),
        /* 0x89 */ ILLEGAL,
        /* 0x8A */ op("TXA", Implicit, 2, NONE),
        /* 0x8B */ ILLEGAL,
        /* 0x8C */ op("STY", Absolute, 4, NONE),
        /* 0x8D */ op("STA", Absolute, 4, NONE),
        /* 0x8E */ op("STX", Absolute, 4, NONE),
        /* 0x8F */ ILLEGAL,
        /* 0x90 */ op("BCC", Relative, 2, BRANCH),
        /* 0x91 */ op("STA", IndirectY, 5, PAGE),
        /* 0x92 */ ILLEGAL,
        /* 0x93 */ ILLEGAL,
        /* 0x94 */ op("STY", ZeroPageX, 4, NONE),
        /* 0x95 */ op("STA", ZeroPageX, 4, NONE),
        /* 0x96 */ op("STX", ZeroPageY, 4, NONE),
        /* 0x97 */ ILLEGAL,
        /* 0x98 */ op("TYA", Implicit, 2, NONE),
        /* 0x99 */ op("STA", AbsoluteY, 4, PAGE),
        /* 0x9A */ op("TXS", Implicit, 2, NONE),
        /* 0x9B */ ILLEGAL,
        /* 0x9C */ ILLEGAL,
        /* 0x9D */ op("STA", AbsoluteX, 4, PAGE),
        /* 0x9E */ ILLEGAL,
        /* 0x9F */ ILLEGAL,
        /* 0xA0 */ op("LDY", Immediate, 2, NONE),
        /* 0xA1 */ op("LDA", IndirectX, 6, NONE),
        /* 0xA2 */ op("LDX", Immediate, 2, NONE),
        /* 0xA3 */ ILLEGAL,
        /* 0xA4 */ op("LDY", ZeroPage, 3, NONE),
        /* 0xA5 */ op("LDA", ZeroPage, 3, NONE),
        /* 0xA6 */ op("LDX", ZeroPage, 3, NONE),
        /* 0xA7 */ ILLEGAL,
        /* 0xA8 */ op("TAY", Implicit, 2, NONE),
        /* 0xA9 */ op("LDA", Immediate, 2, NONE),
        /* 0xAA */ op("TAX", Implicit, 2, NONE),
        /* 0xAB */ ILLEGAL,
        /* 0xAC */ op("LDY", Absolute, 4, NONE),
        /* 0xAD */ op("LDA", Absolute, 4, NONE),
        /* 0xAE */ op("LDX", Absolute, 4, NONE),
        /* 0xAF */ ILLEGAL,
        /* 0xB0 */ op("BCS", Relative, 2, BRANCH),
        /* 0xB1 */ op("LDA", IndirectY, 5, PAGE),
        /* 0xB2 */ ILLEGAL,
        /* 0xB3 */ ILLEGAL,
        /* 0xB4 */ op("LDY", ZeroPageX, 4, NONE),
        /* 0xB5 */ op("LDA", ZeroPageX, 4, NONE),
        /* 0xB6 */ op("LDX", ZeroPageY, 4, NONE),
        /* 0xB7 */ ILLEGAL,
        /* 0xB8 */ op("CLV", Implicit, 2, NONE),
        /* 0xB9 */ op("LDA", AbsoluteY, 4, PAGE),
        /* 0xBA */ op("TSX", Implicit, 2, NONE),
        /* 0xBB */ ILLEGAL,
        /* 0xBC */ op("LDY", AbsoluteX, 4, PAGE),
        /* 0xBD */ op("LDA", AbsoluteX, 4, PAGE),
        /* 0xBE */ op("LDX", AbsoluteY, 4, PAGE),
        /* 0xBF */ ILLEGAL,
        /* 0xC0 */ op("CPY", Immediate, 2, NONE),
        /* 0xC1 */ op("CMP", IndirectX, 6, NONE),
        /* 0xC2 */ ILLEGAL,
        /* 0xC3 */ ILLEGAL,
        /* 0xC4 */ op("CPY", ZeroPage, 3, NONE),
        /* 0xC5 */ op("CMP", ZeroPage, 3, NONE),
        /* 0xC6 */ op("DEC", ZeroPage, 5, NONE),
        /* 0xC7 */ ILLEGAL,
        /* 0xC8 */ op("INY", Implicit, 2, NONE),
        /* 0xC9 */ op("CMP", Immediate, 2, NONE),
        /* 0xCA */ op("DEX", Implicit, 2, NONE),
        /* 0xCB */ ILLEGAL,
        /* 0xCC */ op("CPY", Absolute, 4, NONE),
        /* 0xCD */ op("CMP", Absolute, 4, NONE),
        /* 0xCE */ op("DEC", Absolute, 6, NONE),
        /* 0xCF */ ILLEGAL,
        /* 0xD0 */ op("BNE", Relative, 2, BRANCH),
        /* 0xD1 */ op("CMP", IndirectY, 5, PAGE),
        /* 0xD2 */ ILLEGAL,
        /* 0xD3 */ ILLEGAL,
        /* 0xD4 */ ILLEGAL,
        /* 0xD5 */ op("CMP", ZeroPageX, 4, NONE),
        /* 0xD6 */ op("DEC", ZeroPageX, 6, NONE),
        /* 0xD7 */ ILLEGAL,
        /* 0xD8 */ op("CLD", Implicit, 2, NONE),
        /* 0xD9 */ op("CMP", AbsoluteY, 4, PAGE),
        /* 0xDA */ ILLEGAL,
        /* 0xDB */ ILLEGAL,
        /* 0xDC */ ILLEGAL,
        /* 0xDD */ op("CMP", AbsoluteX, 4, PAGE),
        /* 0xDE */ op("DEC", AbsoluteX, 7, NONE),
        /* 0xDF */ ILLEGAL,
        /* 0xE0 */ op("CPX", Immediate, 2, NONE),
        /* 0xE1 */ op("SBC", IndirectX, 6, NONE),
        /* 0xE2 */ ILLEGAL,
        /* 0xE3 */ ILLEGAL,
        /* 0xE4 */ op("CPX", ZeroPage, 3, NONE),
        /* 0xE5 */ op("SBC", ZeroPage, 3, NONE),
        /* 0xE6 */ op("INC", ZeroPage, 5, NONE),
        /* 0xE7 */ ILLEGAL,
        /* 0xE8 */ op("INX", Implicit, 2, NONE),
        /* 0xE9 */ op("SBC", Immediate, 2, NONE),
        /* 0xEA */ op("NOP", Implicit, 2, NONE),
        /* 0xEB */ ILLEGAL,
        /* 0xEC */ op("CPX", Absolute, 4, NONE),
        /* 0xED */ op("SBC", Absolute, 4, NONE),
        /* 0xEE */ op("INC", Absolute, 6, NONE),
        /* 0xEF */ ILLEGAL,
        /* 0xF0 */ op("BEQ", Relative, 2, BRANCH),
        /* 0xF1 */ op("SBC", IndirectY, 5, PAGE),
        /* 0xF2 */ ILLEGAL,
        /* 0xF3 */ ILLEGAL,
        /* 0xF4 */ ILLEGAL,
        /* 0xF5 */ op("SBC", ZeroPageX, 4, NONE),
        /* 0xF6 */ op("INC", ZeroPageX, 6, NONE),
        /* 0xF7 */ ILLEGAL,
        /* 0xF8 */ op("SED", Implicit, 2, NONE),
        /* 0xF9 */ op("SBC", AbsoluteY, 4, PAGE),
        /* 0xFA */ ILLEGAL,
        /* 0xFB */ ILLEGAL,
        /* 0xFC */ ILLEGAL,
        /* 0xFD */ op("SBC", AbsoluteX, 4, PAGE),
        /* 0xFE */ op("INC", AbsoluteX, 7, NONE),
        /* 0xFF */ ILLEGAL,
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_matches_table() {
        for byte in 0..=255u8 {
            assert_eq!(classify(byte), OPCODE_TABLE[byte as usize]);
        }
    }

    #[test]
    fn test_branches_carry_both_penalties() {
        for opcode in [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
            let meta = classify(opcode);
            assert_eq!(meta.addressing_mode, AddressingMode::Relative);
            assert!(meta.penalties.contains(CyclePenalties::BRANCH_TAKEN));
            assert!(meta.penalties.contains(CyclePenalties::PAGE_CROSS));
        }
    }

    #[test]
    fn test_illegal_entries_are_one_byte() {
        assert_eq!(classify(0x02).size_bytes(), 1);
        assert_eq!(classify(0xFF).size_bytes(), 1);
    }
}
