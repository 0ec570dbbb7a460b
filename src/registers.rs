//! # Register Operands
//!
//! The 8080 encodes its register operands in three-bit and two-bit fields.
//! These enums give each encoding a name so the opcode table can spell out
//! operands explicitly.

/// An 8-bit operand register.
///
/// `M` is the pseudo-register for the memory byte addressed by HL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at the address held in HL
    M,
    A,
}

impl Register {
    /// Assembly name of the register.
    pub const fn name(self) -> &'static str {
        match self {
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
            Register::E => "E",
            Register::H => "H",
            Register::L => "L",
            Register::M => "M",
            Register::A => "A",
        }
    }
}

/// A 16-bit register pair addressed by LXI, INX, DCX, DAD, LDAX and STAX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterPair {
    BC,
    DE,
    HL,
    SP,
}

impl RegisterPair {
    /// Assembly name, which is the name of the high register (or `SP`).
    pub const fn name(self) -> &'static str {
        match self {
            RegisterPair::BC => "B",
            RegisterPair::DE => "D",
            RegisterPair::HL => "H",
            RegisterPair::SP => "SP",
        }
    }
}

/// A register pair addressed by PUSH and POP.
///
/// `PSW` takes the place of SP: the accumulator is the high byte and the
/// packed flag byte the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackPair {
    BC,
    DE,
    HL,
    PSW,
}

impl StackPair {
    pub const fn name(self) -> &'static str {
        match self {
            StackPair::BC => "B",
            StackPair::DE => "D",
            StackPair::HL => "H",
            StackPair::PSW => "PSW",
        }
    }
}

/// Condition tested by the conditional jump, call and return instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Z = 0
    NotZero,
    /// Z = 1
    Zero,
    /// C = 0
    NoCarry,
    /// C = 1
    Carry,
    /// P = 0
    ParityOdd,
    /// P = 1
    ParityEven,
    /// S = 0
    Plus,
    /// S = 1
    Minus,
}

impl Condition {
    /// Mnemonic suffix used by Jcc, Ccc and Rcc.
    pub const fn suffix(self) -> &'static str {
        match self {
            Condition::NotZero => "NZ",
            Condition::Zero => "Z",
            Condition::NoCarry => "NC",
            Condition::Carry => "C",
            Condition::ParityOdd => "PO",
            Condition::ParityEven => "PE",
            Condition::Plus => "P",
            Condition::Minus => "M",
        }
    }
}
