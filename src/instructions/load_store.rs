//! # Load and Store Instructions
//!
//! This module implements data movement between registers and memory:
//! - MOV: Register/memory to register/memory
//! - MVI: Move immediate
//! - LXI: Load register pair immediate
//! - LDA, STA: Load/store accumulator direct
//! - LHLD, SHLD: Load/store HL direct
//! - LDAX, STAX: Load/store accumulator indirect through BC or DE
//!
//! None of these affect the flags.

use super::Flow;
use crate::registers::{Register, RegisterPair};
use crate::{ExecutionError, MachineState, MemoryBus};

/// Executes the MOV instruction.
///
/// Either operand may be `M`, the byte addressed by HL. `MOV M,M` is HLT and
/// never reaches this handler.
pub(crate) fn execute_mov<M: MemoryBus>(
    state: &mut MachineState<M>,
    dst: Register,
    src: Register,
) -> Flow {
    let value = state.register(src);
    state.set_register(dst, value);
    Flow::Next
}

pub(crate) fn execute_mvi<M: MemoryBus>(
    state: &mut MachineState<M>,
    reg: Register,
    value: u8,
) -> Flow {
    state.set_register(reg, value);
    Flow::Next
}

pub(crate) fn execute_lxi<M: MemoryBus>(
    state: &mut MachineState<M>,
    pair: RegisterPair,
    value: u16,
) -> Flow {
    state.set_pair(pair, value);
    Flow::Next
}

pub(crate) fn execute_lda<M: MemoryBus>(state: &mut MachineState<M>, addr: u16) -> Flow {
    state.a = state.memory.read(addr);
    Flow::Next
}

pub(crate) fn execute_sta<M: MemoryBus>(state: &mut MachineState<M>, addr: u16) -> Flow {
    state.memory.write(addr, state.a);
    Flow::Next
}

/// Executes the LHLD (Load HL Direct) instruction.
///
/// L is loaded from `addr` and H from `addr + 1`.
///
/// # Errors
///
/// Returns [`ExecutionError::OutOfBounds`] when `addr` is 0xFFFF. Nothing is
/// modified in that case.
pub(crate) fn execute_lhld<M: MemoryBus>(
    state: &mut MachineState<M>,
    addr: u16,
) -> Result<Flow, ExecutionError> {
    let value = state.read_word(addr)?;
    state.set_pair(RegisterPair::HL, value);
    Ok(Flow::Next)
}

/// Executes the SHLD (Store HL Direct) instruction.
///
/// L is stored at `addr` and H at `addr + 1`, with the same bounds rule as LHLD.
pub(crate) fn execute_shld<M: MemoryBus>(
    state: &mut MachineState<M>,
    addr: u16,
) -> Result<Flow, ExecutionError> {
    let value = state.hl();
    state.write_word(addr, value)?;
    Ok(Flow::Next)
}

pub(crate) fn execute_ldax<M: MemoryBus>(state: &mut MachineState<M>, pair: RegisterPair) -> Flow {
    let addr = state.pair(pair);
    state.a = state.memory.read(addr);
    Flow::Next
}

pub(crate) fn execute_stax<M: MemoryBus>(state: &mut MachineState<M>, pair: RegisterPair) -> Flow {
    let addr = state.pair(pair);
    state.memory.write(addr, state.a);
    Flow::Next
}
