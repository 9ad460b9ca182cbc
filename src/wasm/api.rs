//! WASM API for the disassembler.
//!
//! Provides JavaScript-callable interfaces for structured disassembly and
//! full text listings.

use crate::listing::{format_line, render};
use crate::{Image, ListingOptions};
use wasm_bindgen::prelude::*;

/// One decoded instruction
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    mnemonic: String,
    operand: String,
    cycles: String,
    valid: bool,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    /// Operand text as it appears after the mnemonic
    #[wasm_bindgen(getter)]
    pub fn operand(&self) -> String {
        self.operand.clone()
    }

    /// Cycle count, `"N"` or `"N/M"`
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> String {
        self.cycles.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// The full listing line
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Disassembler interface for JavaScript
#[wasm_bindgen]
pub struct Disassembler6502 {
    options: ListingOptions,
}

#[wasm_bindgen]
impl Disassembler6502 {
    #[wasm_bindgen(constructor)]
    pub fn new(cycle_counting: bool, hex_dump: bool, nes_mode: bool, apple2: bool) -> Self {
        Disassembler6502 {
            options: ListingOptions {
                cycle_counting,
                hex_dump,
                nes_mode,
                apple2,
            },
        }
    }

    /// Disassemble `bytes` loaded at `origin` into an array of `DisassemblyLine`
    pub fn disassemble(&self, bytes: &[u8], origin: u16) -> js_sys::Array {
        let image = Image::load(bytes, origin, usize::MAX);
        let lines = js_sys::Array::new();

        for instr in image.instructions() {
            let line = DisassemblyLine {
                address: instr.address,
                bytes: instr.bytes(),
                mnemonic: instr.mnemonic.to_string(),
                operand: instr.operand.to_string(),
                cycles: instr.cycles.to_string(),
                valid: instr.valid,
                text: format_line(&instr, &self.options),
            };
            lines.push(&JsValue::from(line));
        }

        lines
    }

    /// Full text listing, header included
    pub fn listing(&self, bytes: &[u8], origin: u16, filename: &str) -> String {
        let image = Image::load(bytes, origin, usize::MAX);
        render(&image, &self.options, filename)
    }
}
