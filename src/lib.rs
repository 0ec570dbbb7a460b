//! # 8080 CPU Emulator Core
//!
//! An instruction-level Intel 8080 emulator and disassembler built around a
//! single table-driven decoder.
//!
//! This crate provides the machine state of the 8080 (registers, flags, stack
//! pointer, program counter and a flat 64KB memory image), a 256-entry opcode
//! table shared by the disassembler and the execution engine, and a small
//! emulation loop that steps the machine until it halts or faults.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib8080::{load, run, NullPorts, StopReason};
//!
//! // MVI A,5 ; MVI B,3 ; ADD B ; HLT
//! let mut state = load(&[0x3E, 0x05, 0x06, 0x03, 0x80, 0x76]).unwrap();
//! let result = run(&mut state, &mut NullPorts);
//!
//! assert_eq!(result.reason, StopReason::Halted);
//! assert_eq!(state.a(), 8);
//! assert_eq!(state.pc(), 6);
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: every opcode, documented or not, has one entry in
//!   [`OPCODE_TABLE`] describing its mnemonic, size and operation
//! - **Explicit State**: [`MachineState`] is an owned value threaded through
//!   decode and execute; there is no global CPU
//! - **Pluggable Memory and I/O**: memory sits behind [`MemoryBus`], the
//!   `IN`/`OUT` ports behind [`IoPorts`]
//! - **No Panics**: decode and execute failures surface as [`ExecutionError`]
//!
//! ## Modules
//!
//! - `opcodes` - Opcode metadata table
//! - `decoder` - Instruction decoding from memory or byte slices
//! - `disassembler` - Listing generation and text formatting
//! - `state` - Registers, flags and memory of one machine
//! - `emulator` - The run loop and its stop conditions
//! - `session` - `load`/`step`/`run`/`disassemble` convenience API
//! - `hex` - Reader for whitespace-separated hex byte streams

pub mod config;
pub mod decoder;
pub mod disassembler;
pub mod emulator;
pub mod flags;
pub mod hex;
pub mod memory;
pub mod opcodes;
pub mod ports;
pub mod registers;
pub mod session;
pub mod state;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use config::{DisassemblyOptions, EmulatorConfig};
pub use decoder::{decode, decode_bytes, DecodedInstruction};
pub use disassembler::formatter::{render, render_line};
pub use disassembler::{disassemble_instructions, Disassembler};
pub use emulator::{Emulator, FinalResult, RunState, StopReason};
pub use flags::Flags;
pub use hex::{parse_hex, read_hex};
pub use instructions::{execute, ExecResult};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{lookup, AluOp, OpcodeMetadata, Operation, OPCODE_TABLE};
pub use ports::{IoPorts, NullPorts, PortLatch};
pub use registers::{Condition, Register, RegisterPair, StackPair};
pub use session::{disassemble, load, load_with, run, step};
pub use state::MachineState;

/// Errors that can occur while reading, decoding or executing 8080 code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// A byte slice ended before the instruction at `address` was complete.
    #[error("instruction at ${address:04X} needs {needed} bytes but only {available} remain")]
    TruncatedInput {
        /// Address of the opcode byte
        address: u16,
        /// Encoded length of the instruction
        needed: u8,
        /// Bytes left in the input, opcode included
        available: usize,
    },

    /// An access would reach past the 64KB address space.
    #[error("access to ${address:05X} is outside the 64KB address space")]
    OutOfBounds {
        /// First offending address (may exceed 0xFFFF)
        address: u32,
    },

    /// The attached port interface rejected an `IN` or `OUT`.
    #[error("port ${port:02X} rejected the access")]
    InvalidPortAccess {
        /// Port number used by the instruction
        port: u8,
    },

    /// The hex reader met a character that is neither a hex digit nor whitespace.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit {
        /// Character offset in the input
        position: usize,
        /// The offending character
        found: char,
    },
}
