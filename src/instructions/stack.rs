//! # Stack Instructions
//!
//! This module implements stack operations:
//! - PUSH: Push BC, DE, HL or PSW
//! - POP: Pop BC, DE, HL or PSW
//! - XTHL: Exchange HL with the word on top of the stack
//!
//! The stack grows downward. A push stores the high byte at SP-1 and the low
//! byte at SP-2; SP wraps at both ends of the address space. Only `POP PSW`
//! changes the flags.

use super::Flow;
use crate::registers::{RegisterPair, StackPair};
use crate::{MachineState, MemoryBus};

pub(crate) fn execute_push<M: MemoryBus>(state: &mut MachineState<M>, pair: StackPair) -> Flow {
    let value = state.stack_pair(pair);
    state.push_word(value);
    Flow::Next
}

/// Executes the POP instruction.
///
/// `POP PSW` loads A from SP+1 and the flags from the byte at SP; the fixed
/// bits of that byte are not kept.
pub(crate) fn execute_pop<M: MemoryBus>(state: &mut MachineState<M>, pair: StackPair) -> Flow {
    let value = state.pop_word();
    state.set_stack_pair(pair, value);
    Flow::Next
}

/// Executes the XTHL instruction: L <-> (SP), H <-> (SP+1). SP is unchanged.
pub(crate) fn execute_xthl<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    let low_addr = state.sp;
    let high_addr = state.sp.wrapping_add(1);

    let low = state.memory.read(low_addr);
    let high = state.memory.read(high_addr);
    state.memory.write(low_addr, state.l);
    state.memory.write(high_addr, state.h);
    state.set_pair(RegisterPair::HL, u16::from_le_bytes([low, high]));

    Flow::Next
}
