//! # Carry and Complement Instructions
//!
//! - STC: Set carry
//! - CMC: Complement carry
//! - CMA: Complement accumulator (no flags)

use super::Flow;
use crate::{MachineState, MemoryBus};

pub(crate) fn execute_stc<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    state.flags.carry = true;
    Flow::Next
}

pub(crate) fn execute_cmc<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    state.flags.carry = !state.flags.carry;
    Flow::Next
}

pub(crate) fn execute_cma<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    state.a = !state.a;
    Flow::Next
}
