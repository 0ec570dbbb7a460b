//! # Rotate Instructions
//!
//! This module implements the accumulator rotates:
//! - RLC: Rotate left, bit 7 to carry and bit 0
//! - RRC: Rotate right, bit 0 to carry and bit 7
//! - RAL: Rotate left through carry
//! - RAR: Rotate right through carry
//!
//! Only the carry flag is affected.

use super::Flow;
use crate::{MachineState, MemoryBus};

pub(crate) fn execute_rlc<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    state.flags.carry = state.a & 0x80 != 0;
    state.a = state.a.rotate_left(1);
    Flow::Next
}

pub(crate) fn execute_rrc<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    state.flags.carry = state.a & 0x01 != 0;
    state.a = state.a.rotate_right(1);
    Flow::Next
}

pub(crate) fn execute_ral<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    let carry_in = state.flags.carry as u8;
    state.flags.carry = state.a & 0x80 != 0;
    state.a = (state.a << 1) | carry_in;
    Flow::Next
}

pub(crate) fn execute_rar<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    let carry_in = state.flags.carry as u8;
    state.flags.carry = state.a & 0x01 != 0;
    state.a = (state.a >> 1) | (carry_in << 7);
    Flow::Next
}
