//! 6502 Disassembler Module
//!
//! Converts binary machine code into assembly text with static cycle counts.
//!
//! Decoding and presentation are split: [`decoder`] works out what bytes an
//! instruction consumes and produces an [`Operand`] describing them, and
//! [`formatter`] is the one place that turns operands into text.

pub mod decoder;
pub mod formatter;

pub use decoder::decode;
pub use formatter::format_instruction;

use crate::addressing::AddressingMode;
use crate::cycles::CycleCount;
use crate::error::DecodeError;
use crate::image::Image;

/// Decoded operand of an instruction, one variant per addressing mode.
///
/// Word operands are already assembled from their little-endian bytes and
/// branch displacements are already resolved to a target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implicit,
    Accumulator,
    Immediate(u8),
    ZeroPage(u8),
    ZeroPageX(u8),
    ZeroPageY(u8),
    Relative { offset: i8, target: u16 },
    Absolute(u16),
    AbsoluteX(u16),
    AbsoluteY(u16),
    Indirect(u16),
    IndirectX(u8),
    IndirectY(u8),
    /// Undefined opcode, emitted as a raw data byte.
    RawByte(u8),
}

impl Operand {
    /// The 16-bit address this operand names, for modes that carry one.
    ///
    /// This is the base address for the indexed absolute modes, the pointer
    /// for `Indirect` and the resolved target for `Relative`.
    pub const fn effective_address(&self) -> Option<u16> {
        match *self {
            Operand::Absolute(addr)
            | Operand::AbsoluteX(addr)
            | Operand::AbsoluteY(addr)
            | Operand::Indirect(addr) => Some(addr),
            Operand::Relative { target, .. } => Some(target),
            _ => None,
        }
    }
}

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "JMP"), or ".byte" for
    /// undefined opcodes
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Decoded operand
    pub operand: Operand,

    /// Raw operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding penalties)
    pub base_cycles: u8,

    /// Static best/worst cycle cost
    pub cycles: CycleCount,

    /// Whether the opcode is a documented 6502 instruction
    pub valid: bool,
}

impl Instruction {
    /// Address of the byte following this instruction.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.size_bytes as u16)
    }

    /// The opcode followed by its operand bytes.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes as usize);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand_bytes);
        bytes
    }

    /// The inline decode error for an undefined opcode, if any.
    pub fn undefined(&self) -> Option<DecodeError> {
        if self.valid {
            None
        } else {
            Some(DecodeError::UndefinedOpcode(self.opcode))
        }
    }
}

/// Options controlling disassembly
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Address the first byte is loaded at
    pub start_address: u16,

    /// Upper bound on the number of bytes taken from the input
    pub max_bytes: usize,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x8000,
            max_bytes: crate::image::ADDRESS_SPACE,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// The bytes are placed at `options.start_address` in a padded 64KB image and
/// decoded until the end of the loaded data. Input that would run past $FFFF
/// is truncated.
///
/// ```
/// use disasm6502::{disassemble, format_instruction, DisassemblyOptions};
///
/// let code = [0xA9, 0x42, 0x8D, 0x00, 0x80];
/// let listing: Vec<String> = disassemble(&code, DisassemblyOptions::default())
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(listing, ["LDA #$42", "STA $8000"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    Image::load(bytes, options.start_address, options.max_bytes)
        .instructions()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_empty() {
        let bytes = &[];
        let instructions = disassemble(bytes, DisassemblyOptions::default());
        assert_eq!(instructions.len(), 0);
    }

    #[test]
    fn test_effective_address() {
        assert_eq!(Operand::AbsoluteY(0x2002).effective_address(), Some(0x2002));
        assert_eq!(
            Operand::Relative {
                offset: -2,
                target: 0x8000
            }
            .effective_address(),
            Some(0x8000)
        );
        assert_eq!(Operand::ZeroPage(0x10).effective_address(), None);
        assert_eq!(Operand::RawByte(0x02).effective_address(), None);
    }

    #[test]
    fn test_undefined_marker() {
        let instructions = disassemble(&[0x02, 0xEA], DisassemblyOptions::default());
        assert_eq!(
            instructions[0].undefined(),
            Some(DecodeError::UndefinedOpcode(0x02))
        );
        assert_eq!(instructions[1].undefined(), None);
    }
}
