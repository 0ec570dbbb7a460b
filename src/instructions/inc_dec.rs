//! # Increment and Decrement Instructions
//!
//! This module implements increment, decrement and 16-bit add:
//! - INR, DCR: 8-bit increment/decrement of a register or M (S, Z, P, AC; never C)
//! - INX, DCX: 16-bit increment/decrement of a register pair (no flags)
//! - DAD: add a register pair to HL (C only)

use super::Flow;
use crate::registers::{Register, RegisterPair};
use crate::{MachineState, MemoryBus};

/// Executes the INR (Increment Register or Memory) instruction.
pub(crate) fn execute_inr<M: MemoryBus>(state: &mut MachineState<M>, reg: Register) -> Flow {
    let result = state.register(reg).wrapping_add(1);
    state.set_register(reg, result);

    state.flags.aux_carry = result & 0x0F == 0x00;
    state.flags.set_szp(result);

    Flow::Next
}

/// Executes the DCR (Decrement Register or Memory) instruction.
///
/// AC follows the hardware's add-the-complement behaviour: it is clear only
/// when the low nibble borrowed, i.e. the result's low nibble is 0xF.
pub(crate) fn execute_dcr<M: MemoryBus>(state: &mut MachineState<M>, reg: Register) -> Flow {
    let result = state.register(reg).wrapping_sub(1);
    state.set_register(reg, result);

    state.flags.aux_carry = result & 0x0F != 0x0F;
    state.flags.set_szp(result);

    Flow::Next
}

pub(crate) fn execute_inx<M: MemoryBus>(state: &mut MachineState<M>, pair: RegisterPair) -> Flow {
    let value = state.pair(pair).wrapping_add(1);
    state.set_pair(pair, value);
    Flow::Next
}

pub(crate) fn execute_dcx<M: MemoryBus>(state: &mut MachineState<M>, pair: RegisterPair) -> Flow {
    let value = state.pair(pair).wrapping_sub(1);
    state.set_pair(pair, value);
    Flow::Next
}

/// Executes the DAD (Double Add) instruction.
///
/// HL = HL + pair. Carry is the 17th bit of the sum; no other flag changes.
pub(crate) fn execute_dad<M: MemoryBus>(state: &mut MachineState<M>, pair: RegisterPair) -> Flow {
    let sum = state.hl() as u32 + state.pair(pair) as u32;
    state.set_pair(RegisterPair::HL, sum as u16);
    state.flags.carry = sum > 0xFFFF;

    Flow::Next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_wraps_and_keeps_carry() {
        let mut state: MachineState = MachineState::default();
        state.b = 0xFF;
        state.flags.carry = true;
        execute_inr(&mut state, Register::B);

        assert_eq!(state.b, 0x00);
        assert!(state.flags.zero);
        assert!(state.flags.aux_carry);
        assert!(state.flags.carry);
    }

    #[test]
    fn test_inr_memory() {
        let mut state: MachineState = MachineState::default();
        state.set_pair(RegisterPair::HL, 0x3000);
        state.memory.write(0x3000, 0x7F);
        execute_inr(&mut state, Register::M);

        assert_eq!(state.memory.read(0x3000), 0x80);
        assert!(state.flags.sign);
    }

    #[test]
    fn test_dcr_aux_carry() {
        let mut state: MachineState = MachineState::default();
        state.c = 0x10;
        execute_dcr(&mut state, Register::C);
        assert_eq!(state.c, 0x0F);
        assert!(!state.flags.aux_carry);

        execute_dcr(&mut state, Register::C);
        assert_eq!(state.c, 0x0E);
        assert!(state.flags.aux_carry);
    }

    #[test]
    fn test_dcr_to_zero() {
        let mut state: MachineState = MachineState::default();
        state.a = 0x01;
        execute_dcr(&mut state, Register::A);

        assert_eq!(state.a, 0x00);
        assert!(state.flags.zero);
        assert!(!state.flags.carry);
    }

    #[test]
    fn test_inx_dcx_wrap_without_flags() {
        let mut state: MachineState = MachineState::default();
        state.set_pair(RegisterPair::DE, 0xFFFF);
        execute_inx(&mut state, RegisterPair::DE);

        assert_eq!(state.pair(RegisterPair::DE), 0x0000);
        assert!(!state.flags.zero);

        execute_dcx(&mut state, RegisterPair::SP);
        assert_eq!(state.sp, 0xFFFF);
    }

    #[test]
    fn test_dad_carry_only() {
        let mut state: MachineState = MachineState::default();
        state.set_pair(RegisterPair::HL, 0x8000);
        state.set_pair(RegisterPair::BC, 0x8001);
        execute_dad(&mut state, RegisterPair::BC);

        assert_eq!(state.hl(), 0x0001);
        assert!(state.flags.carry);
        assert!(!state.flags.zero);

        execute_dad(&mut state, RegisterPair::HL);
        assert_eq!(state.hl(), 0x0002);
        assert!(!state.flags.carry);
    }
}
