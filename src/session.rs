//! Free-function session API.
//!
//! These functions work on a caller-owned [`MachineState`] and are the
//! shortest path from bytes to results. [`Emulator`](crate::Emulator) wraps
//! the same steps with a run state, instruction limit and tracing.

use crate::config::{DisassemblyOptions, EmulatorConfig};
use crate::decoder::decode;
use crate::disassembler::formatter::render_line;
use crate::disassembler::Disassembler;
use crate::emulator::{FinalResult, StopReason};
use crate::instructions::{execute, ExecResult};
use crate::memory::{FlatMemory, MemoryBus};
use crate::ports::IoPorts;
use crate::state::MachineState;
use crate::ExecutionError;

/// Creates a machine with `bytes` at address 0 and PC = 0.
///
/// # Errors
///
/// [`ExecutionError::OutOfBounds`] if `bytes` is longer than 64KB.
pub fn load(bytes: &[u8]) -> Result<MachineState, ExecutionError> {
    load_with(bytes, &EmulatorConfig::default())
}

/// Creates a machine with `bytes` at `config.load_address` and PC at
/// `config.entry_point`.
pub fn load_with(bytes: &[u8], config: &EmulatorConfig) -> Result<MachineState, ExecutionError> {
    let memory = FlatMemory::from_image(config.load_address, bytes)?;
    Ok(MachineState::with_entry(memory, config.entry_point))
}

/// Decodes and executes the instruction at PC.
///
/// # Examples
///
/// ```
/// use lib8080::{load, step, ExecResult, NullPorts};
///
/// let mut state = load(&[0x06, 0x03, 0x76]).unwrap(); // MVI B,3; HLT
/// assert_eq!(step(&mut state, &mut NullPorts), Ok(ExecResult::Continue));
/// assert_eq!(state.b(), 3);
/// assert_eq!(step(&mut state, &mut NullPorts), Ok(ExecResult::Halted));
/// ```
pub fn step<M: MemoryBus, P: IoPorts>(
    state: &mut MachineState<M>,
    ports: &mut P,
) -> Result<ExecResult, ExecutionError> {
    let instr = decode(state.memory(), state.pc())?;
    execute(&instr, state, ports)
}

/// Steps until HLT or an error.
///
/// There is no instruction limit; a program that never halts never returns.
pub fn run<M: MemoryBus, P: IoPorts>(state: &mut MachineState<M>, ports: &mut P) -> FinalResult {
    let mut instructions_executed = 0;

    let reason = loop {
        match step(state, ports) {
            Ok(ExecResult::Continue) => instructions_executed += 1,
            Ok(ExecResult::Halted) => {
                instructions_executed += 1;
                break StopReason::Halted;
            }
            Err(err) => break StopReason::Error(err),
        }
    };

    FinalResult {
        reason,
        instructions_executed,
    }
}

/// Disassembles `bytes` as if loaded at address 0, one rendered line per
/// instruction.
///
/// # Errors
///
/// [`ExecutionError::TruncatedInput`] if the last instruction is incomplete.
///
/// # Examples
///
/// ```
/// use lib8080::disassemble;
///
/// assert_eq!(disassemble(&[0x00, 0xC3, 0x05, 0x00]).unwrap(), ["0000 NOP", "0001 JMP $0005"]);
/// ```
pub fn disassemble(bytes: &[u8]) -> Result<Vec<String>, ExecutionError> {
    let options = DisassemblyOptions::default();
    Disassembler::new(bytes, options)
        .map(|decoded| decoded.map(|instr| render_line(&instr, &options)))
        .collect()
}
