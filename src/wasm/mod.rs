//! WebAssembly bindings for the disassembler.
//!
//! This module exposes the decoder and listing formatter to JavaScript so a
//! browser page can disassemble a dropped ROM file.

pub mod api;

pub use api::Disassembler6502;
