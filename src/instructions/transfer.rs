//! # Register Pair Transfer Instructions
//!
//! - XCHG: Exchange DE and HL
//! - SPHL: Load SP from HL

use super::Flow;
use crate::registers::RegisterPair;
use crate::{MachineState, MemoryBus};

pub(crate) fn execute_xchg<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    std::mem::swap(&mut state.d, &mut state.h);
    std::mem::swap(&mut state.e, &mut state.l);
    Flow::Next
}

pub(crate) fn execute_sphl<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    state.sp = state.pair(RegisterPair::HL);
    Flow::Next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xchg() {
        let mut state: MachineState = MachineState::default();
        state.set_pair(RegisterPair::DE, 0x1122);
        state.set_pair(RegisterPair::HL, 0x3344);
        execute_xchg(&mut state);

        assert_eq!(state.pair(RegisterPair::DE), 0x3344);
        assert_eq!(state.hl(), 0x1122);
    }

    #[test]
    fn test_sphl() {
        let mut state: MachineState = MachineState::default();
        state.set_pair(RegisterPair::HL, 0x50FE);
        execute_sphl(&mut state);

        assert_eq!(state.sp, 0x50FE);
    }
}
