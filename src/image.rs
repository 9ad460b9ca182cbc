//! # Binary Image
//!
//! A program image laid out in a flat 64KB address space, the way the decoder
//! wants to see it.
//!
//! The decoder reads operand bytes without bounds checks, so the buffer always
//! carries [`PADDING`] zero bytes past $FFFF. An instruction that starts at the
//! very top of memory therefore decodes against zeros instead of faulting.

use std::path::Path;

use crate::disassembler::{decode, Instruction};
use crate::error::LoadError;

/// Size of the 6502 address space.
pub const ADDRESS_SPACE: usize = 0x10000;

/// Zero bytes kept after the address space for operand reads.
pub const PADDING: usize = 2;

/// A loaded binary placed at an origin address.
///
/// ```
/// use disasm6502::{format_instruction, Image};
///
/// let image = Image::load(&[0xA2, 0x00, 0xCA, 0xD0, 0xFD], 0xC000, usize::MAX);
/// let text: Vec<String> = image.instructions().map(|i| format_instruction(&i)).collect();
///
/// assert_eq!(text, ["LDX #$00", "DEX", "BNE $C002"]);
/// ```
#[derive(Clone)]
pub struct Image {
    memory: Box<[u8]>,
    origin: u16,
    len: usize,
}

impl Image {
    /// Places `bytes` at `origin`.
    ///
    /// At most `max_bytes` bytes are taken, and never more than fit below
    /// $10000. Anything beyond is dropped.
    pub fn load(bytes: &[u8], origin: u16, max_bytes: usize) -> Self {
        let room = ADDRESS_SPACE - origin as usize;
        let len = bytes.len().min(max_bytes).min(room);

        if len < bytes.len() {
            tracing::warn!(
                "input truncated to {} of {} bytes (origin ${:04X}, limit {})",
                len,
                bytes.len(),
                origin,
                max_bytes.min(room)
            );
        }

        let mut memory = vec![0u8; ADDRESS_SPACE + PADDING].into_boxed_slice();
        let start = origin as usize;
        memory[start..start + len].copy_from_slice(&bytes[..len]);

        tracing::debug!("loaded {} bytes at ${:04X}", len, origin);

        Self {
            memory,
            origin,
            len,
        }
    }

    /// Reads a whole file and places it at `origin`. See [`Image::load`].
    pub fn from_file(
        path: impl AsRef<Path>,
        origin: u16,
        max_bytes: usize,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::load(&bytes, origin, max_bytes))
    }

    /// Address of the first loaded byte.
    pub fn origin(&self) -> u16 {
        self.origin
    }

    /// Number of bytes loaded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset one past the last loaded byte. May equal $10000.
    pub fn end(&self) -> usize {
        self.origin as usize + self.len
    }

    /// The padded address space, indexed by address.
    pub fn bytes(&self) -> &[u8] {
        &self.memory
    }

    /// Decodes the instruction at `offset`.
    ///
    /// # Panics
    ///
    /// If `offset` is above $FFFF.
    pub fn decode_at(&self, offset: usize) -> (Instruction, usize) {
        assert!(offset < ADDRESS_SPACE, "offset {offset:#X} outside the address space");
        decode(&self.memory, offset)
    }

    /// Decodes every instruction from the origin to the end of the loaded data.
    ///
    /// The last instruction may extend past the end; its operand bytes then
    /// come from whatever follows in the image.
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions {
            image: self,
            cursor: self.origin as usize,
        }
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("origin", &self.origin)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Iterator over the instructions of an [`Image`].
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    image: &'a Image,
    cursor: usize,
}

impl Iterator for Instructions<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        if self.cursor >= self.image.end() {
            return None;
        }

        let (instr, next) = decode(&self.image.memory, self.cursor);
        self.cursor = next;
        Some(instr)
    }
}
