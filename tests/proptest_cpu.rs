//! Property-based tests for execution invariants.
//!
//! These tests use proptest to verify that instruction execution maintains
//! fundamental invariants across all possible input combinations.

use lib8080::{
    load, step, ExecResult, Flags, MachineState, MemoryBus, NullPorts, Operation, RegisterPair,
    StackPair, OPCODE_TABLE,
};
use proptest::prelude::*;

/// Create a state with `program` at 0x8000 and PC there
fn setup_state(program: &[u8]) -> MachineState {
    let mut state = load(&[]).unwrap();
    for (i, &byte) in program.iter().enumerate() {
        state.memory_mut().write(0x8000 + i as u16, byte);
    }
    state.set_pc(0x8000);
    state.set_sp(0x4000);
    state.set_pair(RegisterPair::HL, 0x2000);
    state
}

/// Opcodes whose PC update is purely length-based
fn non_branching_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            !matches!(
                m.operation,
                Operation::Jump(_)
                    | Operation::Call(_)
                    | Operation::Return(_)
                    | Operation::Restart(_)
                    | Operation::Pchl
            )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

fn flags_strategy() -> impl Strategy<Value = Flags> {
    any::<u8>().prop_map(Flags::from_byte)
}

// ========== PC Advancement Property Tests ==========

proptest! {
    /// Property: For non-branching instructions, PC advances by exactly size_bytes
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(non_branching_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        flags in flags_strategy(),
    ) {
        let mut state = setup_state(&[opcode, operand1, operand2]);
        state.set_flags(flags);
        let metadata = &OPCODE_TABLE[opcode as usize];

        let result = step(&mut state, &mut NullPorts);
        prop_assume!(result.is_ok()); // LHLD/SHLD $FFFF

        prop_assert_eq!(
            state.pc(),
            0x8000 + metadata.size_bytes as u16,
            "PC should advance by {} bytes for opcode 0x{:02X} ({})",
            metadata.size_bytes,
            opcode,
            metadata.mnemonic
        );
    }

    /// Property: Conditional jumps land on the target or the next instruction
    #[test]
    fn prop_conditional_jump_targets(
        cc in 0u8..8,
        target in any::<u16>(),
        flags in flags_strategy(),
    ) {
        let [low, high] = target.to_le_bytes();
        let mut state = setup_state(&[0xC2 | (cc << 3), low, high]);
        state.set_flags(flags);
        step(&mut state, &mut NullPorts).unwrap();

        prop_assert!(state.pc() == target || state.pc() == 0x8003);
        prop_assert_eq!(state.sp(), 0x4000);
    }
}

// ========== Flag Property Tests ==========

proptest! {
    /// Property: ADD sets Z, S, P and C from the true sum
    #[test]
    fn prop_add_flags(a in any::<u8>(), b in any::<u8>()) {
        let mut state = setup_state(&[0x80]); // ADD B
        state.set_a(a);
        state.set_pair(RegisterPair::BC, (b as u16) << 8);
        step(&mut state, &mut NullPorts).unwrap();

        let sum = a as u16 + b as u16;
        let result = sum as u8;
        prop_assert_eq!(state.a(), result);
        prop_assert_eq!(state.flags().carry, sum > 0xFF);
        prop_assert_eq!(state.flags().zero, result == 0);
        prop_assert_eq!(state.flags().sign, result & 0x80 != 0);
        prop_assert_eq!(state.flags().parity, result.count_ones() % 2 == 0);
        prop_assert_eq!(state.flags().aux_carry, (a & 0x0F) + (b & 0x0F) > 0x0F);
    }

    /// Property: CMP sets C iff A < operand and Z iff A == operand
    #[test]
    fn prop_cmp_orders(a in any::<u8>(), value in any::<u8>()) {
        let mut state = setup_state(&[0xFE, value]); // CPI
        state.set_a(a);
        step(&mut state, &mut NullPorts).unwrap();

        prop_assert_eq!(state.flags().carry, a < value);
        prop_assert_eq!(state.flags().zero, a == value);
        prop_assert_eq!(state.a(), a);
    }

    /// Property: INR and DCR never change carry
    #[test]
    fn prop_inr_dcr_preserve_carry(
        value in any::<u8>(),
        carry in any::<bool>(),
        inc in any::<bool>(),
    ) {
        let mut state = setup_state(&[if inc { 0x3C } else { 0x3D }]); // INR A / DCR A
        state.set_a(value);
        state.set_flags(Flags { carry, ..Flags::default() });
        step(&mut state, &mut NullPorts).unwrap();

        prop_assert_eq!(state.flags().carry, carry);
    }

    /// Property: SUB then ADD of the same value restores A
    #[test]
    fn prop_sub_add_inverse(a in any::<u8>(), value in any::<u8>()) {
        let mut state = setup_state(&[0xD6, value, 0xC6, value]); // SUI; ADI
        state.set_a(a);
        step(&mut state, &mut NullPorts).unwrap();
        step(&mut state, &mut NullPorts).unwrap();

        prop_assert_eq!(state.a(), a);
    }
}

// ========== Stack Property Tests ==========

proptest! {
    /// Property: PUSH then POP of the same pair restores value and SP
    #[test]
    fn prop_push_pop_restores(
        pair_index in 0u8..4,
        value in any::<u16>(),
        sp in any::<u16>(),
    ) {
        let pairs = [StackPair::BC, StackPair::DE, StackPair::HL, StackPair::PSW];
        let pair = pairs[pair_index as usize];
        let push = 0xC5 | (pair_index << 4);
        let pop = 0xC1 | (pair_index << 4);

        // Keep the pushed bytes off the program at 0x8000..=0x8001
        prop_assume!(!(0x8000..=0x8003).contains(&sp));
        let mut state = setup_state(&[push, pop]);
        state.set_sp(sp);
        state.set_stack_pair(pair, value);
        let before = state.stack_pair(pair);

        prop_assert_eq!(step(&mut state, &mut NullPorts), Ok(ExecResult::Continue));
        state.set_stack_pair(pair, 0);
        prop_assert_eq!(step(&mut state, &mut NullPorts), Ok(ExecResult::Continue));

        prop_assert_eq!(state.stack_pair(pair), before);
        prop_assert_eq!(state.sp(), sp);
    }

    /// Property: PSW packing round-trips through the flags byte
    #[test]
    fn prop_psw_packing(packed in any::<u8>()) {
        let flags = Flags::from_byte(packed);
        prop_assert_eq!(Flags::from_byte(flags.to_byte()), flags);
        prop_assert_eq!(flags.to_byte() & 0b0010_1010, 0b0000_0010);
    }
}
