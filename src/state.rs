//! # Machine State
//!
//! This module contains [`MachineState`], everything the 8080 executes against:
//!
//! - **Registers**: Accumulator (A) and the six general registers B, C, D, E, H, L
//! - **Register pairs**: BC, DE, HL and PSW, derived from the 8-bit registers
//! - **Program counter** (PC) and **stack pointer** (SP), both 16-bit
//! - **Condition flags**: S, Z, P, C, AC as named booleans
//! - **Interrupt enable** flip-flop
//! - **Memory**: a 64KB [`MemoryBus`]
//!
//! One `MachineState` belongs to one session; nothing in it is shared.

use crate::flags::Flags;
use crate::memory::{FlatMemory, MemoryBus};
use crate::registers::{Register, RegisterPair, StackPair};
use crate::ExecutionError;

/// 8080 registers, flags and memory.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use lib8080::{FlatMemory, MachineState, RegisterPair};
///
/// let mut state = MachineState::new(FlatMemory::new());
/// state.set_pair(RegisterPair::HL, 0x1234);
///
/// assert_eq!(state.h(), 0x12);
/// assert_eq!(state.l(), 0x34);
/// assert_eq!(state.pc(), 0x0000);
/// ```
pub struct MachineState<M: MemoryBus = FlatMemory> {
    pub(crate) a: u8,
    pub(crate) b: u8,
    pub(crate) c: u8,
    pub(crate) d: u8,
    pub(crate) e: u8,
    pub(crate) h: u8,
    pub(crate) l: u8,

    /// Stack pointer (grows downward)
    pub(crate) sp: u16,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    pub(crate) flags: Flags,

    /// Set by EI, cleared by DI and by accepting an interrupt
    pub(crate) interrupts_enabled: bool,

    pub(crate) memory: M,
}

impl<M: MemoryBus> MachineState<M> {
    /// Creates a state with all registers and flags zeroed and PC at 0x0000.
    pub fn new(memory: M) -> Self {
        Self::with_entry(memory, 0x0000)
    }

    /// Creates a zeroed state with PC at `entry_point`.
    pub fn with_entry(memory: M, entry_point: u16) -> Self {
        Self {
            a: 0x00,
            b: 0x00,
            c: 0x00,
            d: 0x00,
            e: 0x00,
            h: 0x00,
            l: 0x00,
            sp: 0x0000,
            pc: entry_point,
            flags: Flags::default(),
            interrupts_enabled: false,
            memory,
        }
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn c(&self) -> u8 {
        self.c
    }

    pub fn d(&self) -> u8 {
        self.d
    }

    pub fn e(&self) -> u8 {
        self.e
    }

    pub fn h(&self) -> u8 {
        self.h
    }

    pub fn l(&self) -> u8 {
        self.l
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the condition flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns true if EI has been executed since the last DI or interrupt.
    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus mutably, e.g. to patch a program before running it.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn set_interrupts_enabled(&mut self, enabled: bool) {
        self.interrupts_enabled = enabled;
    }

    // ========== Operand Access ==========

    /// Reads an 8-bit operand. `M` reads the byte addressed by HL.
    pub fn register(&self, reg: Register) -> u8 {
        match reg {
            Register::A => self.a,
            Register::B => self.b,
            Register::C => self.c,
            Register::D => self.d,
            Register::E => self.e,
            Register::H => self.h,
            Register::L => self.l,
            Register::M => self.memory.read(self.hl()),
        }
    }

    /// Writes an 8-bit operand. `M` writes the byte addressed by HL.
    pub fn set_register(&mut self, reg: Register, value: u8) {
        match reg {
            Register::A => self.a = value,
            Register::B => self.b = value,
            Register::C => self.c = value,
            Register::D => self.d = value,
            Register::E => self.e = value,
            Register::H => self.h = value,
            Register::L => self.l = value,
            Register::M => {
                let addr = self.hl();
                self.memory.write(addr, value);
            }
        }
    }

    /// Reads a 16-bit register pair (high register in the upper byte).
    pub fn pair(&self, pair: RegisterPair) -> u16 {
        match pair {
            RegisterPair::BC => u16::from_be_bytes([self.b, self.c]),
            RegisterPair::DE => u16::from_be_bytes([self.d, self.e]),
            RegisterPair::HL => self.hl(),
            RegisterPair::SP => self.sp,
        }
    }

    /// Writes a 16-bit register pair.
    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        let [high, low] = value.to_be_bytes();
        match pair {
            RegisterPair::BC => {
                self.b = high;
                self.c = low;
            }
            RegisterPair::DE => {
                self.d = high;
                self.e = low;
            }
            RegisterPair::HL => {
                self.h = high;
                self.l = low;
            }
            RegisterPair::SP => self.sp = value,
        }
    }

    /// Reads a PUSH/POP pair. PSW is the accumulator over the packed flags.
    pub fn stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::BC => self.pair(RegisterPair::BC),
            StackPair::DE => self.pair(RegisterPair::DE),
            StackPair::HL => self.hl(),
            StackPair::PSW => u16::from_be_bytes([self.a, self.flags.to_byte()]),
        }
    }

    /// Writes a PUSH/POP pair. Writing PSW unpacks the low byte into the flags.
    pub fn set_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::BC => self.set_pair(RegisterPair::BC, value),
            StackPair::DE => self.set_pair(RegisterPair::DE, value),
            StackPair::HL => self.set_pair(RegisterPair::HL, value),
            StackPair::PSW => {
                let [a, packed] = value.to_be_bytes();
                self.a = a;
                self.flags = Flags::from_byte(packed);
            }
        }
    }

    /// HL, the memory pointer used by `M` operands.
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    // ========== Memory Helpers ==========

    /// Reads a little-endian word at `addr`.
    ///
    /// Fails with [`ExecutionError::OutOfBounds`] when `addr` is 0xFFFF, since
    /// the high byte would sit past the address space.
    pub fn read_word(&self, addr: u16) -> Result<u16, ExecutionError> {
        let high_addr = word_high_address(addr)?;
        Ok(u16::from_le_bytes([
            self.memory.read(addr),
            self.memory.read(high_addr),
        ]))
    }

    /// Writes a little-endian word at `addr`. Same bounds rule as [`read_word`](Self::read_word).
    pub fn write_word(&mut self, addr: u16, value: u16) -> Result<(), ExecutionError> {
        let high_addr = word_high_address(addr)?;
        let [low, high] = value.to_le_bytes();
        self.memory.write(addr, low);
        self.memory.write(high_addr, high);
        Ok(())
    }

    /// Pushes a word: high byte to SP-1, low byte to SP-2, then SP -= 2.
    ///
    /// SP wraps modulo 0x10000 like the hardware register.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.memory.write(self.sp.wrapping_sub(1), high);
        self.memory.write(self.sp.wrapping_sub(2), low);
        self.sp = self.sp.wrapping_sub(2);
    }

    /// Pops a word: low byte from SP, high byte from SP+1, then SP += 2.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let low = self.memory.read(self.sp);
        let high = self.memory.read(self.sp.wrapping_add(1));
        self.sp = self.sp.wrapping_add(2);
        u16::from_le_bytes([low, high])
    }
}

fn word_high_address(addr: u16) -> Result<u16, ExecutionError> {
    addr.checked_add(1).ok_or(ExecutionError::OutOfBounds {
        address: addr as u32 + 1,
    })
}

impl Default for MachineState<FlatMemory> {
    fn default() -> Self {
        Self::new(FlatMemory::new())
    }
}

impl<M: MemoryBus> std::fmt::Debug for MachineState<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachineState")
            .field("a", &format_args!("{:02X}", self.a))
            .field("bc", &format_args!("{:04X}", self.pair(RegisterPair::BC)))
            .field("de", &format_args!("{:04X}", self.pair(RegisterPair::DE)))
            .field("hl", &format_args!("{:04X}", self.hl()))
            .field("sp", &format_args!("{:04X}", self.sp))
            .field("pc", &format_args!("{:04X}", self.pc))
            .field("flags", &self.flags)
            .field("interrupts_enabled", &self.interrupts_enabled)
            .finish()
    }
}
