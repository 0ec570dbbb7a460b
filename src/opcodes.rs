//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that serves as the
//! single source of truth for all 8080 instruction information. The decoder reads
//! instruction lengths from it, the formatter reads mnemonics and operands, and
//! the execution engine dispatches on its [`Operation`] values.
//!
//! The table covers:
//! - **244 documented instructions** - Official Intel 8080 opcodes
//! - **12 undocumented encodings** - Single-byte no-ops, each marked as an
//!   alias of NOP (0x00)
//!
//! Every byte value has an entry; there is no "illegal opcode" fallback.

use crate::registers::{Condition as Cc, Register as R, RegisterPair as Rp, StackPair as Sp};

/// Arithmetic/logical operation applied to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// A + operand
    Add,
    /// A + operand + C
    Adc,
    /// A - operand
    Sub,
    /// A - operand - C
    Sbb,
    /// A & operand
    Ana,
    /// A ^ operand
    Xra,
    /// A | operand
    Ora,
    /// Flags of A - operand, A unchanged
    Cmp,
}

/// What an opcode does, with its register operands spelled out.
///
/// Immediate data and addresses are not part of the operation; they follow the
/// opcode in the instruction stream and are carried by
/// [`DecodedInstruction`](crate::DecodedInstruction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Nop,

    // Data transfer
    Mov { dst: R, src: R },
    Mvi(R),
    Lxi(Rp),
    Lda,
    Sta,
    Lhld,
    Shld,
    Ldax(Rp),
    Stax(Rp),
    Xchg,

    // Arithmetic and logical
    Alu(AluOp, R),
    AluImmediate(AluOp),
    Inr(R),
    Dcr(R),
    Inx(Rp),
    Dcx(Rp),
    Dad(Rp),
    Daa,
    Rlc,
    Rrc,
    Ral,
    Rar,
    Cma,
    Stc,
    Cmc,

    // Branch. `None` is the unconditional form.
    Jump(Option<Cc>),
    Call(Option<Cc>),
    Return(Option<Cc>),
    /// RST n: call to address n * 8
    Restart(u8),
    Pchl,

    // Stack
    Push(Sp),
    Pop(Sp),
    Xthl,
    Sphl,

    // I/O and machine control
    In,
    Out,
    Ei,
    Di,
    Hlt,
}

/// Metadata for a single 8080 opcode.
///
/// # Examples
///
/// ```
/// use lib8080::{Operation, Register, OPCODE_TABLE};
///
/// // MVI A,d8 (opcode 0x3E)
/// let mvi = &OPCODE_TABLE[0x3E];
/// assert_eq!(mvi.mnemonic, "MVI");
/// assert_eq!(mvi.operation, Operation::Mvi(Register::A));
/// assert_eq!(mvi.size_bytes, 2);
/// assert!(!mvi.is_undocumented());
///
/// // 0xCB is an undocumented single-byte no-op
/// assert_eq!(OPCODE_TABLE[0xCB].alias_of, Some(0x00));
/// assert_eq!(OPCODE_TABLE[0xCB].size_bytes, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "MOV", "JNZ", "ADI").
    pub mnemonic: &'static str,

    /// Operation performed by the execution engine.
    pub operation: Operation,

    /// Total instruction size in bytes (opcode + immediate bytes, 1-3).
    pub size_bytes: u8,

    /// For undocumented encodings, the documented opcode this one duplicates.
    pub alias_of: Option<u8>,
}

impl OpcodeMetadata {
    /// Number of immediate bytes following the opcode (0, 1 or 2).
    pub const fn immediate_bytes(&self) -> u8 {
        self.size_bytes - 1
    }

    /// True for encodings the architecture does not document.
    pub const fn is_undocumented(&self) -> bool {
        self.alias_of.is_some()
    }
}

const fn op(mnemonic: &'static str, operation: Operation, size_bytes: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        size_bytes,
        alias_of: None,
    }
}

const fn alias(
    mnemonic: &'static str,
    operation: Operation,
    size_bytes: u8,
    of: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        size_bytes,
        alias_of: Some(of),
    }
}

use Operation::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op("NOP", Nop, 1), // 0x00
    op("LXI", Lxi(Rp::BC), 3), // 0x01
    op("STAX", Stax(Rp::BC), 1), // 0x02
    op("INX", Inx(Rp::BC), 1), // 0x03
    op("INR", Inr(R::B), 1), // 0x04
    op("DCR", Dcr(R::B), 1), // 0x05
    op("MVI", Mvi(R::B), 2), // 0x06
    op("RLC", Rlc, 1), // 0x07
    alias("NOP", Nop, 1, 0x00), // 0x08
    op("DAD", Dad(Rp::BC), 1), // 0x09
    op("LDAX", Ldax(Rp::BC), 1), // 0x0A
    op("DCX", Dcx(Rp::BC), 1), // 0x0B
    op("INR", Inr(R::C), 1), // 0x0C
    op("DCR", Dcr(R::C), 1), // 0x0D
    op("MVI", Mvi(R::C), 2), // 0x0E
    op("RRC", Rrc, 1), // 0x0F
    alias("NOP", Nop, 1, 0x00), // 0x10
    op("LXI", Lxi(Rp::DE), 3), // 0x11
    op("STAX", Stax(Rp::DE), 1), // 0x12
    op("INX", Inx(Rp::DE), 1), // 0x13
    op("INR", Inr(R::D), 1), // 0x14
    op("DCR", Dcr(R::D), 1), // 0x15
    op("MVI", Mvi(R::D), 2), // 0x16
    op("RAL", Ral, 1), // 0x17
    alias("NOP", Nop, 1, 0x00), // 0x18
    op("DAD", Dad(Rp::DE), 1), // 0x19
    op("LDAX", Ldax(Rp::DE), 1), // 0x1A
    op("DCX", Dcx(Rp::DE), 1), // 0x1B
    op("INR", Inr(R::E), 1), // 0x1C
    op("DCR", Dcr(R::E), 1), // 0x1D
    op("MVI", Mvi(R::E), 2), // 0x1E
    op("RAR", Rar, 1), // 0x1F
    alias("NOP", Nop, 1, 0x00), // 0x20
    op("LXI", Lxi(Rp::HL), 3), // 0x21
    op("SHLD", Shld, 3), // 0x22
    op("INX", Inx(Rp::HL), 1), // 0x23
    op("INR", Inr(R::H), 1), // 0x24
    op("DCR", Dcr(R::H), 1), // 0x25
    op("MVI", Mvi(R::H), 2), // 0x26
    op("DAA", Daa, 1), // 0x27
    alias("NOP", Nop, 1, 0x00), // 0x28
    op("DAD", Dad(Rp::HL), 1), // 0x29
    op("LHLD", Lhld, 3), // 0x2A
    op("DCX", Dcx(Rp::HL), 1), // 0x2B
    op("INR", Inr(R::L), 1), // 0x2C
    op("DCR", Dcr(R::L), 1), // 0x2D
    op("MVI", Mvi(R::L), 2), // 0x2E
    op("CMA", Cma, 1), // 0x2F
    alias("NOP", Nop, 1, 0x00), // 0x30
    op("LXI", Lxi(Rp::SP), 3), // 0x31
    op("STA", Sta, 3), // 0x32
    op("INX", Inx(Rp::SP), 1), // 0x33
    op("INR", Inr(R::M), 1), // 0x34
    op("DCR", Dcr(R::M), 1), // 0x35
    op("MVI", Mvi(R::M), 2), // 0x36
    op("STC", Stc, 1), // 0x37
    alias("NOP", Nop, 1, 0x00), // 0x38
    op("DAD", Dad(Rp::SP), 1), // 0x39
    op("LDA", Lda, 3), // 0x3A
    op("DCX", Dcx(Rp::SP), 1), // 0x3B
    op("INR", Inr(R::A), 1), // 0x3C
    op("DCR", Dcr(R::A), 1), // 0x3D
    op("MVI", Mvi(R::A), 2), // 0x3E
    op("CMC", Cmc, 1), // 0x3F
    op("MOV", Mov { dst: R::B, src: R::B }, 1), // 0x40
    op("MOV", Mov { dst: R::B, src: R::C }, 1), // 0x41
    op("MOV", Mov { dst: R::B, src: R::D }, 1), // 0x42
    op("MOV", Mov { dst: R::B, src: R::E }, 1), // 0x43
    op("MOV", Mov { dst: R::B, src: R::H }, 1), // 0x44
    op("MOV", Mov { dst: R::B, src: R::L }, 1), // 0x45
    op("MOV", Mov { dst: R::B, src: R::M }, 1), // 0x46
    op("MOV", Mov { dst: R::B, src: R::A }, 1), // 0x47
    op("MOV", Mov { dst: R::C, src: R::B }, 1), // 0x48
    op("MOV", Mov { dst: R::C, src: R::C }, 1), // 0x49
    op("MOV", Mov { dst: R::C, src: R::D }, 1), // 0x4A
    op("MOV", Mov { dst: R::C, src: R::E }, 1), // 0x4B
    op("MOV", Mov { dst: R::C, src: R::H }, 1), // 0x4C
    op("MOV", Mov { dst: R::C, src: R::L }, 1), // 0x4D
    op("MOV", Mov { dst: R::C, src: R::M }, 1), // 0x4E
    op("MOV", Mov { dst: R::C, src: R::A }, 1), // 0x4F
    op("MOV", Mov { dst: R::D, src: R::B }, 1), // 0x50
    op("MOV", Mov { dst: R::D, src: R::C }, 1), // 0x51
    op("MOV", Mov { dst: R::D, src: R::D }, 1), // 0x52
    op("MOV", Mov { dst: R::D, src: R::E }, 1), // 0x53
    op("MOV", Mov { dst: R::D, src: R::H }, 1), // 0x54
    op("MOV", Mov { dst: R::D, src: R::L }, 1), // 0x55
    op("MOV", Mov { dst: R::D, src: R::M }, 1), // 0x56
    op("MOV", Mov { dst: R::D, src: R::A }, 1), // 0x57
    op("MOV", Mov { dst: R::E, src: R::B }, 1), // 0x58
    op("MOV", Mov { dst: R::E, src: R::C }, 1), // 0x59
    op("MOV", Mov { dst: R::E, src: R::D }, 1), // 0x5A
    op("MOV", Mov { dst: R::E, src: R::E }, 1), // 0x5B
    op("MOV", Mov { dst: R::E, src: R::H }, 1), // 0x5C
    op("MOV", Mov { dst: R::E, src: R::L }, 1), // 0x5D
    op("MOV", Mov { dst: R::E, src: R::M }, 1), // 0x5E
    op("MOV", Mov { dst: R::E, src: R::A }, 1), // 0x5F
    op("MOV", Mov { dst: R::H, src: R::B }, 1), // 0x60
    op("MOV", Mov { dst: R::H, src: R::C }, 1), // 0x61
    op("MOV", Mov { dst: R::H, src: R::D }, 1), // 0x62
    op("MOV", Mov { dst: R::H, src: R::E }, 1), // 0x63
    op("MOV", Mov { dst: R::H, src: R::H }, 1), // 0x64
    op("MOV", Mov { dst: R::H, src: R::L }, 1), // 0x65
    op("MOV", Mov { dst: R::H, src: R::M }, 1), // 0x66
    op("MOV", Mov { dst: R::H, src: R::A }, 1), // 0x67
    op("MOV", Mov { dst: R::L, src: R::B }, 1), // 0x68
    op("MOV", Mov { dst: R::L, src: R::C }, 1), // 0x69
    op("MOV", Mov { dst: R::L, src: R::D }, 1), // 0x6A
    op("MOV", Mov { dst: R::L, src: R::E }, 1), // 0x6B
    op("MOV", Mov { dst: R::L, src: R::H }, 1), // 0x6C
    op("MOV", Mov { dst: R::L, src: R::L }, 1), // 0x6D
    op("MOV", Mov { dst: R::L, src: R::M }, 1), // 0x6E
    op("MOV", Mov { dst: R::L, src: R::A }, 1), // 0x6F
    op("MOV", Mov { dst: R::M, src: R::B }, 1), // 0x70
    op("MOV", Mov { dst: R::M, src: R::C }, 1), // 0x71
    op("MOV", Mov { dst: R::M, src: R::D }, 1), // 0x72
    op("MOV", Mov { dst: R::M, src: R::E }, 1), // 0x73
    op("MOV", Mov { dst: R::M, src: R::H }, 1), // 0x74
    op("MOV", Mov { dst: R::M, src: R::L }, 1), // 0x75
    op("HLT", Hlt, 1), // 0x76
    op("MOV", Mov { dst: R::M, src: R::A }, 1), // 0x77
    op("MOV", Mov { dst: R::A, src: R::B }, 1), // 0x78
    op("MOV", Mov { dst: R::A, src: R::C }, 1), // 0x79
    op("MOV", Mov { dst: R::A, src: R::D }, 1), // 0x7A
    op("MOV", Mov { dst: R::A, src: R::E }, 1), // 0x7B
    op("MOV", Mov { dst: R::A, src: R::H }, 1), // 0x7C
    op("MOV", Mov { dst: R::A, src: R::L }, 1), // 0x7D
    op("MOV", Mov { dst: R::A, src: R::M }, 1), // 0x7E
    op("MOV", Mov { dst: R::A, src: R::A }, 1), // 0x7F
    op("ADD", Alu(AluOp::Add, R::B), 1), // 0x80
    op("ADD", Alu(AluOp::Add, R::C), 1), // 0x81
    op("ADD", Alu(AluOp::Add, R::D), 1), // 0x82
    op("ADD", Alu(AluOp::Add, R::E), 1), // 0x83
    op("ADD", Alu(AluOp::Add, R::H), 1), // 0x84
    op("ADD", Alu(AluOp::Add, R::L), 1), // 0x85
    op("ADD", Alu(AluOp::Add, R::M), 1), // 0x86
    op("ADD", Alu(AluOp::Add, R::A), 1), // 0x87
    op("ADC", Alu(AluOp::Adc, R::B), 1), // 0x88
    op("ADC", Alu(AluOp::Adc, R::C), 1), // 0x89
    op("ADC", Alu(AluOp::Adc, R::D), 1), // 0x8A
    op("ADC", Alu(AluOp::Adc, R::E), 1), // 0x8B
    op("ADC", Alu(AluOp::Adc, R::H), 1), // 0x8C
    op("ADC", Alu(AluOp::Adc, R::L), 1), // 0x8D
    op("ADC", Alu(AluOp::Adc, R::M), 1), // 0x8E
    op("ADC", Alu(AluOp::Adc, R::A), 1), // 0x8F
    op("SUB", Alu(AluOp::Sub, R::B), 1), // 0x90
    op("SUB", Alu(AluOp::Sub, R::C), 1), // 0x91
    op("SUB", Alu(AluOp::Sub, R::D), 1), // 0x92
    op("SUB", Alu(AluOp::Sub, R::E), 1), // 0x93
    op("SUB", Alu(AluOp::Sub, R::H), 1), // 0x94
    op("SUB", Alu(AluOp::Sub, R::L), 1), // 0x95
    op("SUB", Alu(AluOp::Sub, R::M), 1), // 0x96
    op("SUB", Alu(AluOp::Sub, R::A), 1), // 0x97
    op("SBB", Alu(AluOp::Sbb, R::B), 1), // 0x98
    op("SBB", Alu(AluOp::Sbb, R::C), 1), // 0x99
    op("SBB", Alu(AluOp::Sbb, R::D), 1), // 0x9A
    op("SBB", Alu(AluOp::Sbb, R::E), 1), // 0x9B
    op("SBB", Alu(AluOp::Sbb, R::H), 1), // 0x9C
    op("SBB", Alu(AluOp::Sbb, R::L), 1), // 0x9D
    op("SBB", Alu(AluOp::Sbb, R::M), 1), // 0x9E
    op("SBB", Alu(AluOp::Sbb, R::A), 1), // 0x9F
    op("ANA", Alu(AluOp::Ana, R::B), 1), // 0xA0
    op("ANA", Alu(AluOp::Ana, R::C), 1), // 0xA1
    op("ANA", Alu(AluOp::Ana, R::D), 1), // 0xA2
    op("ANA", Alu(AluOp::Ana, R::E), 1), // 0xA3
    op("ANA", Alu(AluOp::Ana, R::H), 1), // 0xA4
    op("ANA", Alu(AluOp::Ana, R::L), 1), // 0xA5
    op("ANA", Alu(AluOp::Ana, R::M), 1), // 0xA6
    op("ANA", Alu(AluOp::Ana, R::A), 1), // 0xA7
    op("XRA", Alu(AluOp::Xra, R::B), 1), // 0xA8
    op("XRA", Alu(AluOp::Xra, R::C), 1), // 0xA9
    op("XRA", Alu(AluOp::Xra, R::D), 1), // 0xAA
    op("XRA", Alu(AluOp::Xra, R::E), 1), // 0xAB
    op("XRA", Alu(AluOp::Xra, R::H), 1), // 0xAC
    op("XRA", Alu(AluOp::Xra, R::L), 1), // 0xAD
    op("XRA", Alu(AluOp::Xra, R::M), 1), // 0xAE
    op("XRA", Alu(AluOp::Xra, R::A), 1), // 0xAF
    op("ORA", Alu(AluOp::Ora, R::B), 1), // 0xB0
    op("ORA", Alu(AluOp::Ora, R::C), 1), // 0xB1
    op("ORA", Alu(AluOp::Ora, R::D), 1), // 0xB2
    op("ORA", Alu(AluOp::Ora, R::E), 1), // 0xB3
    op("ORA", Alu(AluOp::Ora, R::H), 1), // 0xB4
    op("ORA", Alu(AluOp::Ora, R::L), 1), // 0xB5
    op("ORA", Alu(AluOp::Ora, R::M), 1), // 0xB6
    op("ORA", Alu(AluOp::Ora, R::A), 1), // 0xB7
    op("CMP", Alu(AluOp::Cmp, R::B), 1), // 0xB8
    op("CMP", Alu(AluOp::Cmp, R::C), 1), // 0xB9
    op("CMP", Alu(AluOp::Cmp, R::D), 1), // 0xBA
    op("CMP", Alu(AluOp::Cmp, R::E), 1), // 0xBB
    op("CMP", Alu(AluOp::Cmp, R::H), 1), // 0xBC
    op("CMP", Alu(AluOp::Cmp, R::L), 1), // 0xBD
    op("CMP", Alu(AluOp::Cmp, R::M), 1), // 0xBE
    op("CMP", Alu(AluOp::Cmp, R::A), 1), // 0xBF
    op("RNZ", Return(Some(Cc::NotZero)), 1), // 0xC0
    op("POP", Pop(Sp::BC), 1), // 0xC1
    op("JNZ", Jump(Some(Cc::NotZero)), 3), // 0xC2
    op("JMP", Jump(None), 3), // 0xC3
    op("CNZ", Call(Some(Cc::NotZero)), 3), // 0xC4
    op("PUSH", Push(Sp::BC), 1), // 0xC5
    op("ADI", AluImmediate(AluOp::Add), 2), // 0xC6
    op("RST", Restart(0), 1), // 0xC7
    op("RZ", Return(Some(Cc::Zero)), 1), // 0xC8
    op("RET", Return(None), 1), // 0xC9
    op("JZ", Jump(Some(Cc::Zero)), 3), // 0xCA
    alias("NOP", Nop, 1, 0x00), // 0xCB
    op("CZ", Call(Some(Cc::Zero)), 3), // 0xCC
    op("CALL", Call(None), 3), // 0xCD
    op("ACI", AluImmediate(AluOp::Adc), 2), // 0xCE
    op("RST", Restart(1), 1), // 0xCF
    op("RNC", Return(Some(Cc::NoCarry)), 1), // 0xD0
    op("POP", Pop(Sp::DE), 1), // 0xD1
    op("JNC", Jump(Some(Cc::NoCarry)), 3), // 0xD2
    op("OUT", Out, 2), // 0xD3
    op("CNC", Call(Some(Cc::NoCarry)), 3), // 0xD4
    op("PUSH", Push(Sp::DE), 1), // 0xD5
    op("SUI", AluImmediate(AluOp::Sub), 2), // 0xD6
    op("RST", Restart(2), 1), // 0xD7
    op("RC", Return(Some(Cc::Carry)), 1), // 0xD8
    alias("NOP", Nop, 1, 0x00), // 0xD9
    op("JC", Jump(Some(Cc::Carry)), 3), // 0xDA
    op("IN", In, 2), // 0xDB
    op("CC", Call(Some(Cc::Carry)), 3), // 0xDC
    alias("NOP", Nop, 1, 0x00), // 0xDD
    op("SBI", AluImmediate(AluOp::Sbb), 2), // 0xDE
    op("RST", Restart(3), 1), // 0xDF
    op("RPO", Return(Some(Cc::ParityOdd)), 1), // 0xE0
    op("POP", Pop(Sp::HL), 1), // 0xE1
    op("JPO", Jump(Some(Cc::ParityOdd)), 3), // 0xE2
    op("XTHL", Xthl, 1), // 0xE3
    op("CPO", Call(Some(Cc::ParityOdd)), 3), // 0xE4
    op("PUSH", Push(Sp::HL), 1), // 0xE5
    op("ANI", AluImmediate(AluOp::Ana), 2), // 0xE6
    op("RST", Restart(4), 1), // 0xE7
    op("RPE", Return(Some(Cc::ParityEven)), 1), // 0xE8
    op("PCHL", Pchl, 1), // 0xE9
    op("JPE", Jump(Some(Cc::ParityEven)), 3), // 0xEA
    op("XCHG", Xchg, 1), // 0xEB
    op("CPE", Call(Some(Cc::ParityEven)), 3), // 0xEC
    alias("NOP", Nop, 1, 0x00), // 0xED
    op("XRI", AluImmediate(AluOp::Xra), 2), // 0xEE
    op("RST", Restart(5), 1), // 0xEF
    op("RP", Return(Some(Cc::Plus)), 1), // 0xF0
    op("POP", Pop(Sp::PSW), 1), // 0xF1
    op("JP", Jump(Some(Cc::Plus)), 3), // 0xF2
    op("DI", Di, 1), // 0xF3
    op("CP", Call(Some(Cc::Plus)), 3), // 0xF4
    op("PUSH", Push(Sp::PSW), 1), // 0xF5
    op("ORI", AluImmediate(AluOp::Ora), 2), // 0xF6
    op("RST", Restart(6), 1), // 0xF7
    op("RM", Return(Some(Cc::Minus)), 1), // 0xF8
    op("SPHL", Sphl, 1), // 0xF9
    op("JM", Jump(Some(Cc::Minus)), 3), // 0xFA
    op("EI", Ei, 1), // 0xFB
    op("CM", Call(Some(Cc::Minus)), 3), // 0xFC
    alias("NOP", Nop, 1, 0x00), // 0xFD
    op("CPI", AluImmediate(AluOp::Cmp), 2), // 0xFE
    op("RST", Restart(7), 1), // 0xFF
];

/// Looks up the metadata for an opcode byte.
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}
