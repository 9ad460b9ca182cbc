//! # 6502 Disassembler and Cycle Counter
//!
//! Decodes NMOS 6502 machine code into assembler text, with static best/worst
//! case cycle counts for every instruction.
//!
//! ## Quick Start
//!
//! ```rust
//! use disasm6502::{Image, ListingOptions};
//! use disasm6502::listing::format_line;
//!
//! // LDA #$00 / STA $2000 / BEQ back to the LDA
//! let code = [0xA9, 0x00, 0x8D, 0x00, 0x20, 0xF0, 0xF9];
//! let image = Image::load(&code, 0x8000, usize::MAX);
//!
//! let options = ListingOptions { cycle_counting: true, nes_mode: true, ..Default::default() };
//! let lines: Vec<String> = image.instructions().map(|i| format_line(&i, &options)).collect();
//!
//! assert_eq!(lines[0], "$8000   LDA #$00        ; Cycles: 2");
//! assert_eq!(lines[1], "$8002   STA $2000       ; Cycles: 4 [NES] PPU setup #1");
//! assert_eq!(lines[2], "$8005   BEQ $8000       ; Cycles: 2/3");
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: every opcode's mnemonic, addressing mode, base
//!   cycles and penalty flags live in one constant table
//! - **Decode / Present Split**: the decoder yields a structured [`Operand`],
//!   and a single formatter turns it into text
//! - **No Hidden State**: decoding is a pure function of the buffer and offset;
//!   the only shared data is the immutable opcode table
//! - **WebAssembly Portability**: the library does no I/O besides
//!   [`Image::from_file`]
//!
//! ## Modules
//!
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration
//! - `cycles` - Static cycle counting
//! - `disassembler` - Decoder and formatter
//! - `image` - Padded 64KB program image
//! - `listing` - Source listing layout
//! - `nes` - NES register names

pub mod addressing;
pub mod cycles;
pub mod disassembler;
pub mod error;
pub mod image;
pub mod listing;
pub mod nes;
pub mod opcodes;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cycles::CycleCount;
pub use disassembler::{
    decode, disassemble, format_instruction, DisassemblyOptions, Instruction, Operand,
};
pub use error::{DecodeError, LoadError};
pub use image::Image;
pub use listing::ListingOptions;
pub use opcodes::{classify, CyclePenalties, OpcodeMetadata, OPCODE_TABLE};
