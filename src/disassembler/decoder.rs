//! Instruction decoder for the 6502 disassembler

use crate::addressing::AddressingMode;
use crate::cycles::{count_cycles, CycleCount};
use crate::disassembler::{Instruction, Operand};
use crate::opcodes::classify;

/// Decode a single instruction at `offset` in `buffer`.
///
/// `buffer` is indexed by 6502 address, so `offset` is also the address of
/// the instruction and must be at most $FFFF. Returns the instruction and the
/// offset of the next one, which is `offset + 1 + operand width` and is not
/// wrapped at the top of the address space.
///
/// Undefined opcodes decode to a one-byte `.byte $XX` pseudo-instruction.
///
/// # Panics
///
/// Operand bytes are read without bounds clamping. The caller must keep at
/// least two bytes of padding after the last offset it decodes from; an
/// [`Image`](crate::Image) always does.
///
/// ```
/// use disasm6502::decode;
///
/// let mut buffer = vec![0u8; 0x8004];
/// buffer[0x8000] = 0x90; // BCC
/// buffer[0x8001] = 0xFE; // -2
///
/// let (instr, next) = decode(&buffer, 0x8000);
/// assert_eq!(instr.operand.effective_address(), Some(0x8000));
/// assert_eq!(next, 0x8002);
/// ```
pub fn decode(buffer: &[u8], offset: usize) -> (Instruction, usize) {
    debug_assert!(offset <= 0xFFFF, "offset {offset:#X} outside the address space");

    let address = offset as u16;
    let opcode = buffer[offset];
    let metadata = classify(opcode);

    if !metadata.valid {
        tracing::trace!("undefined opcode ${:02X} at ${:04X}", opcode, address);

        let instr = Instruction {
            address,
            opcode,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implicit,
            operand: Operand::RawByte(opcode),
            operand_bytes: Vec::new(),
            size_bytes: 1,
            base_cycles: 0,
            cycles: CycleCount::fixed(0),
            valid: false,
        };
        return (instr, offset + 1);
    }

    let size_bytes = metadata.size_bytes();
    let operand_bytes = buffer[offset + 1..offset + size_bytes as usize].to_vec();
    let next_address = address.wrapping_add(size_bytes as u16);
    let operand = decode_operand(metadata.addressing_mode, &operand_bytes, next_address);
    let cycles = count_cycles(&metadata, next_address, operand.effective_address());

    let instr = Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand,
        operand_bytes,
        size_bytes,
        base_cycles: metadata.base_cycles,
        cycles,
        valid: true,
    };

    (instr, offset + size_bytes as usize)
}

/// Build the operand for `mode` from its raw bytes.
///
/// `bytes` holds exactly `mode.operand_width()` bytes. `next_address` is the
/// address right after the instruction, which branch displacements are
/// relative to.
fn decode_operand(mode: AddressingMode, bytes: &[u8], next_address: u16) -> Operand {
    use AddressingMode::*;

    let byte = || bytes[0];
    let word = || u16::from_le_bytes([bytes[0], bytes[1]]);

    match mode {
        Implicit => Operand::Implicit,
        Accumulator => Operand::Accumulator,
        Immediate => Operand::Immediate(byte()),
        ZeroPage => Operand::ZeroPage(byte()),
        ZeroPageX => Operand::ZeroPageX(byte()),
        ZeroPageY => Operand::ZeroPageY(byte()),
        Relative => {
            let offset = byte() as i8;
            Operand::Relative {
                offset,
                target: next_address.wrapping_add(offset as u16),
            }
        }
        Absolute => Operand::Absolute(word()),
        AbsoluteX => Operand::AbsoluteX(word()),
        AbsoluteY => Operand::AbsoluteY(word()),
        Indirect => Operand::Indirect(word()),
        IndirectX => Operand::IndirectX(byte()),
        IndirectY => Operand::IndirectY(byte()),
    }
}
