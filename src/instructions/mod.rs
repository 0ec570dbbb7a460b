//! # 8080 Instruction Implementations
//!
//! This module contains the execution engine: [`execute`] dispatches on the
//! [`Operation`] recorded in the opcode table to a small handler per
//! instruction, organized by category.
//!
//! ## Categories
//!
//! - **alu**: Accumulator arithmetic and logic (ADD, ADC, SUB, SBB, ANA, XRA, ORA, CMP, DAA)
//! - **inc_dec**: Increment/decrement and 16-bit add (INR, DCR, INX, DCX, DAD)
//! - **shifts**: Accumulator rotates (RLC, RRC, RAL, RAR)
//! - **flags**: Carry and complement (STC, CMC, CMA)
//! - **load_store**: Register/memory moves (MOV, MVI, LXI, LDA, STA, LHLD, SHLD, LDAX, STAX)
//! - **transfer**: Register pair exchanges (XCHG, SPHL)
//! - **stack**: Stack operations (PUSH, POP, XTHL)
//! - **branches**: Jumps, calls, returns and restarts (JMP, Jcc, CALL, Ccc, RET, Rcc, RST, PCHL)
//! - **control**: I/O and machine control (IN, OUT, EI, DI, HLT, NOP)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::decoder::DecodedInstruction;
use crate::memory::MemoryBus;
use crate::opcodes::Operation;
use crate::ports::IoPorts;
use crate::state::MachineState;
use crate::ExecutionError;

/// Outcome of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecResult {
    /// Keep running
    Continue,
    /// HLT was executed
    Halted,
}

/// Where the program counter goes after a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Fall through to the next sequential instruction
    Next,
    /// Control transfer; skip the length-based advance
    Jump(u16),
    /// Advance past the instruction and stop
    Halt,
}

/// Execute one decoded instruction against `state`.
///
/// Advances PC by the instruction's length unless the instruction transferred
/// control, in which case PC is the transfer target. Errors leave PC at the
/// faulting instruction.
///
/// # Examples
///
/// ```
/// use lib8080::{decode, execute, ExecResult, FlatMemory, MachineState, NullPorts};
///
/// let memory = FlatMemory::from_image(0, &[0x3E, 0x2A]).unwrap(); // MVI A,$2A
/// let mut state = MachineState::new(memory);
///
/// let instr = decode(state.memory(), state.pc()).unwrap();
/// assert_eq!(execute(&instr, &mut state, &mut NullPorts), Ok(ExecResult::Continue));
/// assert_eq!(state.a(), 0x2A);
/// assert_eq!(state.pc(), 0x0002);
/// ```
pub fn execute<M: MemoryBus, P: IoPorts>(
    instr: &DecodedInstruction,
    state: &mut MachineState<M>,
    ports: &mut P,
) -> Result<ExecResult, ExecutionError> {
    use Operation::*;

    let metadata = instr.metadata();
    if let Some(documented) = metadata.alias_of {
        log::warn!(
            "undocumented opcode ${:02X} at ${:04X} executed as ${:02X} ({})",
            instr.opcode(),
            instr.address(),
            documented,
            metadata.mnemonic
        );
    }

    let flow = match metadata.operation {
        Nop => control::execute_nop(),

        Mov { dst, src } => load_store::execute_mov(state, dst, src),
        Mvi(reg) => load_store::execute_mvi(state, reg, instr.immediate8()),
        Lxi(pair) => load_store::execute_lxi(state, pair, instr.immediate16()),
        Lda => load_store::execute_lda(state, instr.immediate16()),
        Sta => load_store::execute_sta(state, instr.immediate16()),
        Lhld => load_store::execute_lhld(state, instr.immediate16())?,
        Shld => load_store::execute_shld(state, instr.immediate16())?,
        Ldax(pair) => load_store::execute_ldax(state, pair),
        Stax(pair) => load_store::execute_stax(state, pair),
        Xchg => transfer::execute_xchg(state),

        Alu(op, reg) => {
            let value = state.register(reg);
            alu::execute_alu(state, op, value)
        }
        AluImmediate(op) => alu::execute_alu(state, op, instr.immediate8()),
        Inr(reg) => inc_dec::execute_inr(state, reg),
        Dcr(reg) => inc_dec::execute_dcr(state, reg),
        Inx(pair) => inc_dec::execute_inx(state, pair),
        Dcx(pair) => inc_dec::execute_dcx(state, pair),
        Dad(pair) => inc_dec::execute_dad(state, pair),
        Daa => alu::execute_daa(state),
        Rlc => shifts::execute_rlc(state),
        Rrc => shifts::execute_rrc(state),
        Ral => shifts::execute_ral(state),
        Rar => shifts::execute_rar(state),
        Cma => flags::execute_cma(state),
        Stc => flags::execute_stc(state),
        Cmc => flags::execute_cmc(state),

        Jump(condition) => branches::execute_jump(state, condition, instr.immediate16()),
        Call(condition) => branches::execute_call(state, condition, instr),
        Return(condition) => branches::execute_return(state, condition),
        Restart(vector) => branches::execute_restart(state, vector, instr.next_address()),
        Pchl => branches::execute_pchl(state),

        Push(pair) => stack::execute_push(state, pair),
        Pop(pair) => stack::execute_pop(state, pair),
        Xthl => stack::execute_xthl(state),
        Sphl => transfer::execute_sphl(state),

        In => control::execute_in(state, ports, instr.immediate8())?,
        Out => control::execute_out(state, ports, instr.immediate8())?,
        Ei => control::execute_ei(state),
        Di => control::execute_di(state),
        Hlt => control::execute_hlt(),
    };

    match flow {
        Flow::Next => {
            state.pc = instr.next_address();
            Ok(ExecResult::Continue)
        }
        Flow::Jump(target) => {
            state.pc = target;
            Ok(ExecResult::Continue)
        }
        Flow::Halt => {
            state.pc = instr.next_address();
            Ok(ExecResult::Halted)
        }
    }
}
