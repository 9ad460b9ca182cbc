//! Basic disassembler usage example

use disasm6502::listing::format_line;
use disasm6502::{Image, ListingOptions};

fn main() {
    // Wait for vblank, then copy a palette byte to the PPU
    let code = &[
        0x2C, 0x02, 0x20, // BIT $2002
        0x10, 0xFB, //       BPL $8000
        0xA9, 0x3F, //       LDA #$3F
        0x8D, 0x06, 0x20, // STA $2006
        0xBD, 0x00, 0x03, // LDA $0300,X
        0x8D, 0x07, 0x20, // STA $2007
        0x60, //             RTS
    ];

    let image = Image::load(code, 0x8000, usize::MAX);
    let options = ListingOptions {
        cycle_counting: true,
        hex_dump: true,
        nes_mode: true,
        apple2: false,
    };

    println!("Disassembled code:");
    for instr in image.instructions() {
        println!("{}", format_line(&instr, &options));
    }
}
