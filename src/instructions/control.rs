//! # Machine Control and I/O Instructions
//!
//! - NOP: No operation
//! - IN, OUT: Port input/output through [`IoPorts`]
//! - EI, DI: Enable/disable interrupts
//! - HLT: Halt

use super::Flow;
use crate::ports::IoPorts;
use crate::{ExecutionError, MachineState, MemoryBus};

pub(crate) fn execute_nop() -> Flow {
    Flow::Next
}

/// Executes the IN instruction: A = input from `port`.
///
/// # Errors
///
/// Propagates the port handler's error; A is left unchanged.
pub(crate) fn execute_in<M: MemoryBus, P: IoPorts>(
    state: &mut MachineState<M>,
    ports: &mut P,
    port: u8,
) -> Result<Flow, ExecutionError> {
    state.a = ports.read_port(port)?;
    Ok(Flow::Next)
}

/// Executes the OUT instruction: send A to `port`.
pub(crate) fn execute_out<M: MemoryBus, P: IoPorts>(
    state: &mut MachineState<M>,
    ports: &mut P,
    port: u8,
) -> Result<Flow, ExecutionError> {
    ports.write_port(port, state.a)?;
    Ok(Flow::Next)
}

pub(crate) fn execute_ei<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    state.interrupts_enabled = true;
    Flow::Next
}

pub(crate) fn execute_di<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    state.interrupts_enabled = false;
    Flow::Next
}

pub(crate) fn execute_hlt() -> Flow {
    Flow::Halt
}
