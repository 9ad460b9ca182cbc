//! # Listing Output
//!
//! Lays decoded instructions out as assembler source lines:
//!
//! ```text
//! $8000> A9 42:   LDA #$42        ; Cycles: 2
//! $8002> BD 0002: LDA $0200,X     ; Cycles: 4/5
//! $8005> 8D 0220: STA $2000       ; Cycles: 4 [NES] PPU setup #1
//! ```
//!
//! The address column comes in four flavours depending on the hex dump and
//! Apple II switches. Everything after the `;` is annotation.

use std::io::{self, Write};

use crate::addressing::AddressingMode;
use crate::disassembler::{format_instruction, Instruction};
use crate::image::Image;
use crate::nes;

/// Output switches for a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Append ` Cycles: N` or ` Cycles: N/M` to each instruction.
    pub cycle_counting: bool,

    /// Show the instruction bytes next to the address.
    pub hex_dump: bool,

    /// Append NES register names to absolute-mode operands.
    pub nes_mode: bool,

    /// Use the Apple II monitor style `XXXX:` address column.
    pub apple2: bool,
}

impl ListingOptions {
    fn address_width(&self) -> usize {
        if self.hex_dump {
            16
        } else {
            8
        }
    }
}

/// Formats one listing line, without a trailing newline.
///
/// ```
/// use disasm6502::{disassemble, DisassemblyOptions, ListingOptions};
/// use disasm6502::listing::format_line;
///
/// let instr = &disassemble(&[0xBD, 0x00, 0x02], DisassemblyOptions::default())[0];
/// let options = ListingOptions { cycle_counting: true, ..Default::default() };
///
/// assert_eq!(format_line(instr, &options), "$8000   LDA $0200,X     ; Cycles: 4/5");
/// ```
pub fn format_line(instr: &Instruction, options: &ListingOptions) -> String {
    let mut line = format!(
        "{:<width$}{:<16};",
        address_column(instr, options),
        format_instruction(instr),
        width = options.address_width(),
    );

    if !instr.valid {
        line.push_str(" INVALID OPCODE !!!");
        return line;
    }

    if options.cycle_counting {
        line.push_str(&format!(" Cycles: {}", instr.cycles));
    }

    if options.nes_mode {
        if let Some(name) = nes_annotation(instr) {
            line.push_str(" [NES] ");
            line.push_str(name);
        }
    }

    line
}

/// Only the plain absolute modes name a register directly.
fn nes_annotation(instr: &Instruction) -> Option<&'static str> {
    match instr.addressing_mode {
        AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => {
            instr.operand.effective_address().and_then(nes::register_name)
        }
        _ => None,
    }
}

fn address_column(instr: &Instruction, options: &ListingOptions) -> String {
    let address = instr.address;
    let opcode = instr.opcode;
    let operands = instr.operand_bytes.as_slice();

    match (options.hex_dump, options.apple2) {
        (false, false) => format!("${:04X}", address),
        (false, true) => format!("{:04X}:", address),
        (true, false) => match operands {
            [] => format!("${:04X}> {:02X}:", address, opcode),
            [lo] => format!("${:04X}> {:02X} {:02X}:", address, opcode, lo),
            [lo, hi, ..] => format!("${:04X}> {:02X} {:02X}{:02X}:", address, opcode, lo, hi),
        },
        (true, true) => match operands {
            [] => format!("{:04X}:{:02X}        ", address, opcode),
            [lo] => format!("{:04X}:{:02X} {:02X}    ", address, opcode, lo),
            [lo, hi, ..] => format!("{:04X}:{:02X} {:02X} {:02X}", address, opcode, lo, hi),
        },
    }
}

/// The comment block that opens a listing, ending with the `ORG` line.
pub fn header(options: &ListingOptions, filename: &str, origin: u16, file_size: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "; Source generated by {} version {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!(
        "; FILENAME: {}, File Size: ${:04X} ({})\n",
        filename, file_size, file_size
    ));

    let switches = [
        (options.hex_dump, "Hex output enabled"),
        (options.cycle_counting, "Cycle counting enabled"),
        (options.nes_mode, "NES mode enabled"),
        (options.apple2, "Apple II output enabled"),
    ];
    for (_, description) in switches.iter().filter(|(enabled, _)| *enabled) {
        out.push_str(&format!(";     -> {}\n", description));
    }

    out.push(';');
    out.push_str(&"-".repeat(75));
    out.push('\n');
    out.push_str(&format!(
        "{:<width$}{:<16};\n",
        "",
        format!("ORG ${:04X}", origin),
        width = options.address_width(),
    ));

    out
}

/// Writes the header and every instruction of `image` to `out`.
pub fn write_listing<W: io::Write>(
    out: &mut W,
    image: &Image,
    options: &ListingOptions,
    filename: &str,
) -> io::Result<()> {
    out.write_all(header(options, filename, image.origin(), image.len()).as_bytes())?;

    for instr in image.instructions() {
        writeln!(out, "{}", format_line(&instr, options))?;
    }

    Ok(())
}

/// The complete listing as a string.
pub fn render(image: &Image, options: &ListingOptions, filename: &str) -> String {
    let mut out = header(options, filename, image.origin(), image.len());

    for instr in image.instructions() {
        out.push_str(&format_line(&instr, options));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(code: &[u8]) -> Instruction {
        Image::load(code, 0x8000, usize::MAX)
            .instructions()
            .next()
            .unwrap()
    }

    #[test]
    fn test_plain_line() {
        let line = format_line(&first(&[0xA9, 0x42]), &ListingOptions::default());
        assert_eq!(line, "$8000   LDA #$42        ;");
    }

    #[test]
    fn test_hex_dump_columns() {
        let options = ListingOptions {
            hex_dump: true,
            ..Default::default()
        };

        assert_eq!(
            format_line(&first(&[0xEA]), &options),
            "$8000> EA:      NOP             ;"
        );
        assert_eq!(
            format_line(&first(&[0xA9, 0x42]), &options),
            "$8000> A9 42:   LDA #$42        ;"
        );
        assert_eq!(
            format_line(&first(&[0x8D, 0x00, 0x20]), &options),
            "$8000> 8D 0020: STA $2000       ;"
        );
    }

    #[test]
    fn test_apple2_columns() {
        let plain = ListingOptions {
            apple2: true,
            ..Default::default()
        };
        assert_eq!(
            format_line(&first(&[0xEA]), &plain),
            "8000:   NOP             ;"
        );

        let hex = ListingOptions {
            apple2: true,
            hex_dump: true,
            ..Default::default()
        };
        assert_eq!(
            format_line(&first(&[0x8D, 0x00, 0x20]), &hex),
            "8000:8D 00 20   STA $2000       ;"
        );
        assert_eq!(
            format_line(&first(&[0xA9, 0x42]), &hex),
            "8000:A9 42      LDA #$42        ;"
        );
    }

    #[test]
    fn test_invalid_opcode_line() {
        let options = ListingOptions {
            cycle_counting: true,
            nes_mode: true,
            ..Default::default()
        };
        assert_eq!(
            format_line(&first(&[0x02]), &options),
            "$8000   .byte $02       ; INVALID OPCODE !!!"
        );
    }

    #[test]
    fn test_nes_annotation_only_for_absolute_modes() {
        let options = ListingOptions {
            nes_mode: true,
            ..Default::default()
        };
        assert_eq!(
            format_line(&first(&[0x8D, 0x14, 0x40]), &options),
            "$8000   STA $4014       ; [NES] Sprite DMA trigger"
        );
        // JMP ($2002) names a pointer, not a register access
        assert_eq!(
            format_line(&first(&[0x6C, 0x02, 0x20]), &options),
            "$8000   JMP ($2002)     ;"
        );
    }

    #[test]
    fn test_cycles_then_nes() {
        let options = ListingOptions {
            cycle_counting: true,
            nes_mode: true,
            ..Default::default()
        };
        assert_eq!(
            format_line(&first(&[0xAD, 0x02, 0x20]), &options),
            "$8000   LDA $2002       ; Cycles: 4 [NES] PPU status"
        );
    }

    #[test]
    fn test_header() {
        let options = ListingOptions {
            cycle_counting: true,
            ..Default::default()
        };
        let text = header(&options, "rom.bin", 0x8000, 0x10);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("; Source generated by disasm6502 version "));
        assert_eq!(lines[1], "; FILENAME: rom.bin, File Size: $0010 (16)");
        assert_eq!(lines[2], ";     -> Cycle counting enabled");
        assert!(lines[3].starts_with(";----"));
        assert_eq!(lines[4], "        ORG $8000       ;");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_write_listing_matches_render() {
        let image = Image::load(&[0xA9, 0x00, 0xF0, 0xFE], 0x8000, usize::MAX);
        let options = ListingOptions::default();

        let mut buffer = Vec::new();
        write_listing(&mut buffer, &image, &options, "a.bin").unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), render(&image, &options, "a.bin"));
    }
}
