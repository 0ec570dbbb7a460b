//! # Branch Instructions
//!
//! This module implements control transfer:
//! - JMP, Jcc: Jump (conditionally)
//! - CALL, Ccc: Push the return address and jump (conditionally)
//! - RET, Rcc: Pop the return address (conditionally)
//! - RST n: One-byte call to `n * 8`
//! - PCHL: Jump to HL
//!
//! Conditional forms that are not taken fall through to the next instruction
//! and touch neither the stack nor the flags.

use super::Flow;
use crate::decoder::DecodedInstruction;
use crate::registers::{Condition, RegisterPair};
use crate::{MachineState, MemoryBus};

/// True when `condition` is absent (unconditional) or holds for the current flags.
fn taken<M: MemoryBus>(state: &MachineState<M>, condition: Option<Condition>) -> bool {
    condition.map_or(true, |cc| state.flags.test(cc))
}

pub(crate) fn execute_jump<M: MemoryBus>(
    state: &mut MachineState<M>,
    condition: Option<Condition>,
    target: u16,
) -> Flow {
    if taken(state, condition) {
        Flow::Jump(target)
    } else {
        Flow::Next
    }
}

/// Executes CALL and the conditional calls.
///
/// The pushed return address is the address of the instruction following the
/// call, wrapping past 0xFFFF.
pub(crate) fn execute_call<M: MemoryBus>(
    state: &mut MachineState<M>,
    condition: Option<Condition>,
    instr: &DecodedInstruction,
) -> Flow {
    if !taken(state, condition) {
        return Flow::Next;
    }

    state.push_word(instr.next_address());
    Flow::Jump(instr.immediate16())
}

pub(crate) fn execute_return<M: MemoryBus>(
    state: &mut MachineState<M>,
    condition: Option<Condition>,
) -> Flow {
    if taken(state, condition) {
        Flow::Jump(state.pop_word())
    } else {
        Flow::Next
    }
}

/// Executes RST n: push `return_addr` and jump to `n * 8`.
pub(crate) fn execute_restart<M: MemoryBus>(
    state: &mut MachineState<M>,
    vector: u8,
    return_addr: u16,
) -> Flow {
    state.push_word(return_addr);
    Flow::Jump(restart_address(vector))
}

pub(crate) fn execute_pchl<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    Flow::Jump(state.pair(RegisterPair::HL))
}

/// Services a maskable interrupt by performing RST `vector` at the current PC.
///
/// Returns false without touching the state if interrupts are disabled.
/// Acceptance disables further interrupts until the program executes EI.
pub(crate) fn service_interrupt<M: MemoryBus>(state: &mut MachineState<M>, vector: u8) -> bool {
    if !state.interrupts_enabled {
        return false;
    }

    state.interrupts_enabled = false;
    state.push_word(state.pc);
    state.pc = restart_address(vector);
    true
}

fn restart_address(vector: u8) -> u16 {
    (vector as u16 & 0x07) * 8
}
