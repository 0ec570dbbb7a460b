//! WebAssembly bindings for the 8080 emulator.
//!
//! This module provides JavaScript-callable interfaces to the emulator,
//! enabling browser-based execution and disassembly of 8080 programs.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator8080;
