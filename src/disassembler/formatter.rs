//! Formatting functions for disassembled instructions

use std::fmt;

use crate::disassembler::{Instruction, Operand};

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// `MNEMONIC OPERAND`, or just the mnemonic for implied instructions
pub fn format_instruction(instr: &Instruction) -> String {
    match instr.operand {
        Operand::Implicit => instr.mnemonic.to_string(),
        operand => format!("{} {}", instr.mnemonic, operand),
    }
}

/// Canonical operand syntax. Each addressing mode has exactly one form.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operand::Implicit => Ok(()),
            Operand::Accumulator => f.write_str("A"),
            Operand::Immediate(value) => write!(f, "#${:02X}", value),
            Operand::ZeroPage(addr) => write!(f, "${:02X}", addr),
            Operand::ZeroPageX(addr) => write!(f, "${:02X},X", addr),
            Operand::ZeroPageY(addr) => write!(f, "${:02X},Y", addr),
            Operand::Relative { target, .. } => write!(f, "${:04X}", target),
            Operand::Absolute(addr) => write!(f, "${:04X}", addr),
            Operand::AbsoluteX(addr) => write!(f, "${:04X},X", addr),
            Operand::AbsoluteY(addr) => write!(f, "${:04X},Y", addr),
            Operand::Indirect(addr) => write!(f, "(${:04X})", addr),
            Operand::IndirectX(addr) => write!(f, "(${:02X},X)", addr),
            Operand::IndirectY(addr) => write!(f, "(${:02X}),Y", addr),
            Operand::RawByte(byte) => write!(f, "${:02X}", byte),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;
    use crate::cycles::CycleCount;

    fn instruction(mnemonic: &'static str, operand: Operand) -> Instruction {
        Instruction {
            address: 0x8000,
            opcode: 0x00,
            mnemonic,
            addressing_mode: AddressingMode::Implicit,
            operand,
            operand_bytes: vec![],
            size_bytes: 1,
            base_cycles: 2,
            cycles: CycleCount::fixed(2),
            valid: true,
        }
    }

    #[test]
    fn test_format_every_operand_form() {
        let cases = [
            (Operand::Implicit, "NOP"),
            (Operand::Accumulator, "NOP A"),
            (Operand::Immediate(0x42), "NOP #$42"),
            (Operand::ZeroPage(0x05), "NOP $05"),
            (Operand::ZeroPageX(0x05), "NOP $05,X"),
            (Operand::ZeroPageY(0x05), "NOP $05,Y"),
            (
                Operand::Relative {
                    offset: -2,
                    target: 0x8000,
                },
                "NOP $8000",
            ),
            (Operand::Absolute(0x0400), "NOP $0400"),
            (Operand::AbsoluteX(0x0400), "NOP $0400,X"),
            (Operand::AbsoluteY(0x0400), "NOP $0400,Y"),
            (Operand::Indirect(0xFFFC), "NOP ($FFFC)"),
            (Operand::IndirectX(0x40), "NOP ($40,X)"),
            (Operand::IndirectY(0x40), "NOP ($40),Y"),
        ];

        for (operand, expected) in cases {
            assert_eq!(format_instruction(&instruction("NOP", operand)), expected);
        }
    }

    #[test]
    fn test_format_illegal_opcode() {
        let instr = Instruction {
            valid: false,
            ..instruction(".byte", Operand::RawByte(0xFF))
        };

        assert_eq!(format_instruction(&instr), ".byte $FF");
    }
}
