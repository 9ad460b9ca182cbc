//! NES memory-mapped register names.
//!
//! Used to annotate absolute-mode operands in NES listings.

/// Name of the PPU/APU/IO register at `addr`, if there is one.
///
/// ```
/// use disasm6502::nes::register_name;
///
/// assert_eq!(register_name(0x2002), Some("PPU status"));
/// assert_eq!(register_name(0x8000), None);
/// ```
pub fn register_name(addr: u16) -> Option<&'static str> {
    let name = match addr {
        0x2000 => "PPU setup #1",
        0x2001 => "PPU setup #2",
        0x2002 => "PPU status",
        0x2003 => "SPR-RAM address select",
        0x2004 => "SPR-RAM data",
        0x2005 => "PPU scroll",
        0x2006 => "VRAM address select",
        0x2007 => "VRAM data",
        0x4000..=0x4003 => "Audio -> Square 1",
        0x4004..=0x4007 => "Audio -> Square 2",
        0x4008..=0x400B => "Audio -> Triangle",
        0x400C => "Audio -> Noise control reg",
        // $400D is unused
        0x400E => "Audio -> Noise Frequency reg #1",
        0x400F => "Audio -> Noise Frequency reg #2",
        0x4010 => "Audio -> DPCM control",
        0x4011 => "Audio -> DPCM D/A data",
        0x4012 => "Audio -> DPCM address",
        0x4013 => "Audio -> DPCM data length",
        0x4014 => "Sprite DMA trigger",
        0x4015 => "IRQ status / Sound enable",
        0x4016 => "Joypad & I/O port for port #1",
        0x4017 => "Joypad & I/O port for port #2",
        _ => return None,
    };

    Some(name)
}
