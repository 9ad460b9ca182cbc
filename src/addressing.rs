//! # Addressing Modes
//!
//! The 13 addressing modes of the NMOS 6502. The mode of an opcode is the only
//! thing that decides how many operand bytes follow it and how the operand is
//! rendered in a listing.

/// 6502 addressing mode enumeration.
///
/// # Operand Widths
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit displacement for branch instructions.
    ///
    /// Rendered as the resolved target address, e.g. `BEQ $8010`.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode byte.
    pub const fn operand_width(self) -> u8 {
        use AddressingMode::*;

        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Total encoded size in bytes, opcode included.
    pub const fn size_bytes(self) -> u8 {
        1 + self.operand_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_widths() {
        assert_eq!(AddressingMode::Implicit.operand_width(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_width(), 0);
        assert_eq!(AddressingMode::Relative.operand_width(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_width(), 1);
        assert_eq!(AddressingMode::Indirect.operand_width(), 2);
        assert_eq!(AddressingMode::AbsoluteY.size_bytes(), 3);
    }
}
