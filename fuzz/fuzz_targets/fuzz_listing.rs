//! Fuzz target for listing output.
//!
//! Every listing line must render, and there must be one line per
//! instruction after the header.

#![no_main]

use arbitrary::Arbitrary;
use disasm6502::listing::render;
use disasm6502::{Image, ListingOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    origin: u16,
    cycle_counting: bool,
    hex_dump: bool,
    nes_mode: bool,
    apple2: bool,
}

fuzz_target!(|input: FuzzInput| {
    let options = ListingOptions {
        cycle_counting: input.cycle_counting,
        hex_dump: input.hex_dump,
        nes_mode: input.nes_mode,
        apple2: input.apple2,
    };

    let image = Image::load(&input.bytes, input.origin, usize::MAX);
    let text = render(&image, &options, "fuzz.bin");
    let body = text.lines().skip_while(|line| !line.contains("ORG $")).skip(1);

    assert_eq!(body.count(), image.instructions().count());
});
