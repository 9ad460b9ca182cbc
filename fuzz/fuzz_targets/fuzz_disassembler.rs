//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary images to the decoder and checks that the instruction
//! stream tiles the loaded bytes exactly.

#![no_main]

use arbitrary::Arbitrary;
use disasm6502::{classify, Image, Operand};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    origin: u16,
    max_bytes: u16,
}

fuzz_target!(|input: FuzzInput| {
    let image = Image::load(&input.bytes, input.origin, input.max_bytes as usize);
    let mut expected_offset = image.origin() as usize;

    for instr in image.instructions() {
        assert_eq!(instr.address as usize, expected_offset);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert_eq!(instr.operand_bytes.len() + 1, instr.size_bytes as usize);

        let metadata = classify(instr.opcode);
        assert_eq!(instr.valid, metadata.valid);
        if !instr.valid {
            assert_eq!(instr.operand, Operand::RawByte(instr.opcode));
        }

        assert!(instr.cycles.best <= instr.cycles.worst);
        assert!(instr.cycles.worst <= instr.base_cycles + 2);

        expected_offset += instr.size_bytes as usize;
    }

    // The last instruction may overrun the data by at most two operand bytes
    if !image.is_empty() {
        assert!(expected_offset >= image.end() && expected_offset <= image.end() + 2);
    }
});
