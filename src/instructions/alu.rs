//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements the accumulator operations shared by the register
//! forms (ADD r ... CMP r) and the immediate forms (ADI ... CPI):
//! - ADD/ADI, ADC/ACI: Add (with carry)
//! - SUB/SUI, SBB/SBI: Subtract (with borrow)
//! - ANA/ANI, XRA/XRI, ORA/ORI: Logical AND, XOR, OR
//! - CMP/CPI: Compare (subtract without storing)
//! - DAA: Decimal adjust accumulator
//!
//! All of them recompute S, Z, P, C and AC.

use super::Flow;
use crate::flags::Flags;
use crate::opcodes::AluOp;
use crate::{MachineState, MemoryBus};

/// Applies `op` to the accumulator and `value`.
pub(crate) fn execute_alu<M: MemoryBus>(state: &mut MachineState<M>, op: AluOp, value: u8) -> Flow {
    let carry = state.flags.carry;

    match op {
        AluOp::Add => state.a = add(&mut state.flags, state.a, value, false),
        AluOp::Adc => state.a = add(&mut state.flags, state.a, value, carry),
        AluOp::Sub => state.a = sub(&mut state.flags, state.a, value, false),
        AluOp::Sbb => state.a = sub(&mut state.flags, state.a, value, carry),
        AluOp::Cmp => {
            sub(&mut state.flags, state.a, value, false);
        }
        AluOp::Ana => {
            let result = state.a & value;
            // The 8080 sets AC from bit 3 of the OR of the operands
            state.flags.aux_carry = (state.a | value) & 0x08 != 0;
            state.flags.carry = false;
            state.flags.set_szp(result);
            state.a = result;
        }
        AluOp::Xra => {
            let result = state.a ^ value;
            state.flags.aux_carry = false;
            state.flags.carry = false;
            state.flags.set_szp(result);
            state.a = result;
        }
        AluOp::Ora => {
            let result = state.a | value;
            state.flags.aux_carry = false;
            state.flags.carry = false;
            state.flags.set_szp(result);
            state.a = result;
        }
    }

    Flow::Next
}

/// Executes the DAA (Decimal Adjust Accumulator) instruction.
///
/// Adds 0x06 if the low nibble is above 9 or AC is set, then 0x60 if the high
/// nibble is above 9 (after the low correction) or C is set. C is only ever set,
/// never cleared.
pub(crate) fn execute_daa<M: MemoryBus>(state: &mut MachineState<M>) -> Flow {
    let a = state.a;
    let low = a & 0x0F;
    let high = a >> 4;
    let mut correction = 0u8;
    let mut carry = state.flags.carry;

    if state.flags.aux_carry || low > 9 {
        correction |= 0x06;
    }
    if state.flags.carry || high > 9 || (high >= 9 && low > 9) {
        correction |= 0x60;
        carry = true;
    }

    state.a = add(&mut state.flags, a, correction, false);
    state.flags.carry = carry;

    Flow::Next
}

/// 8-bit add with carry-in; sets all five flags and returns the result.
fn add(flags: &mut Flags, a: u8, value: u8, carry_in: bool) -> u8 {
    let carry_in = carry_in as u8;
    let sum = a as u16 + value as u16 + carry_in as u16;
    let result = sum as u8;

    flags.carry = sum > 0xFF;
    flags.aux_carry = (a & 0x0F) + (value & 0x0F) + carry_in > 0x0F;
    flags.set_szp(result);

    result
}

/// 8-bit subtract with borrow-in; sets all five flags and returns the result.
///
/// C is the borrow. AC follows the hardware, which adds the one's complement:
/// it is the carry out of bit 3 of `a + !value + !borrow`.
fn sub(flags: &mut Flags, a: u8, value: u8, borrow_in: bool) -> u8 {
    let borrow = borrow_in as u8;
    let result = a.wrapping_sub(value).wrapping_sub(borrow);

    flags.carry = (value as u16 + borrow as u16) > a as u16;
    flags.aux_carry = (a & 0x0F) + (!value & 0x0F) + (1 - borrow) > 0x0F;
    flags.set_szp(result);

    result
}
