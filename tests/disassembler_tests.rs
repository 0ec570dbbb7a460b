//! Disassembler integration tests
//!
//! Covers the session-level `disassemble`, the streaming `Disassembler`
//! and listing options.

use lib8080::{
    decode, decode_bytes, disassemble, disassemble_instructions, render, render_line,
    Disassembler, DisassemblyOptions, ExecutionError, FlatMemory,
};

#[test]
fn test_nop_then_jump() {
    let lines = disassemble(&[0x00, 0xC3, 0x05, 0x00]).unwrap();
    assert_eq!(lines, vec!["0000 NOP", "0001 JMP $0005"]);
}

#[test]
fn test_truncated_immediate_is_an_error() {
    assert_eq!(
        disassemble(&[0x3E]),
        Err(ExecutionError::TruncatedInput {
            address: 0x0000,
            needed: 2,
            available: 1,
        })
    );
}

#[test]
fn test_truncated_tail_after_valid_instructions() {
    let result = disassemble(&[0x00, 0x00, 0xCD, 0x00]);
    assert_eq!(
        result,
        Err(ExecutionError::TruncatedInput {
            address: 0x0002,
            needed: 3,
            available: 2,
        })
    );
}

#[test]
fn test_full_program_listing() {
    let code = [
        0x31, 0x00, 0x24, // LXI SP,#$2400
        0x21, 0x00, 0x20, // LXI H,#$2000
        0x7E, // MOV A,M
        0xFE, 0x0D, // CPI #$0D
        0xCA, 0x12, 0x00, // JZ $0012
        0xD3, 0x01, // OUT $01
        0x23, // INX H
        0xC3, 0x06, 0x00, // JMP $0006
        0x76, // HLT
    ];

    assert_eq!(
        disassemble(&code).unwrap(),
        vec![
            "0000 LXI SP,#$2400",
            "0003 LXI H,#$2000",
            "0006 MOV A,M",
            "0007 CPI #$0D",
            "0009 JZ $0012",
            "000C OUT $01",
            "000E INX H",
            "000F JMP $0006",
            "0012 HLT",
        ]
    );
}

#[test]
fn test_undocumented_opcodes_render_raw() {
    let lines = disassemble(&[0x08, 0xDD, 0xCB, 0xD9, 0x00]).unwrap();
    assert_eq!(
        lines,
        vec!["0000 ??? $08", "0001 ??? $DD", "0002 ??? $CB", "0003 ??? $D9", "0004 NOP"]
    );
}

#[test]
fn test_start_address_and_bytes() {
    let options = DisassemblyOptions {
        start_address: 0x0100,
        show_bytes: true,
    };
    let lines: Vec<String> = Disassembler::new(&[0x3E, 0x05, 0xC9], options)
        .map(|instr| render_line(&instr.unwrap(), &options))
        .collect();

    assert_eq!(lines, vec!["0100 3E 05    MVI A,#$05", "0102 C9       RET"]);
}

#[test]
fn test_disassemble_instructions_sizes() {
    let bytes = [0x01, 0x02, 0x03, 0x06, 0x07, 0x00];
    let instructions = disassemble_instructions(&bytes, DisassemblyOptions::default()).unwrap();

    let sizes: Vec<u8> = instructions.iter().map(|i| i.size_bytes()).collect();
    assert_eq!(sizes, vec![3, 2, 1]);
    assert_eq!(instructions[1].immediate8(), 0x07);
}

#[test]
fn test_iterator_stops_after_error() {
    let mut iter = Disassembler::new(&[0x3E], DisassemblyOptions::default());
    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());
}

#[test]
fn test_decode_from_memory_matches_slice() {
    let code = [0x2A, 0x34, 0x12];
    let memory = FlatMemory::from_image(0x4000, &code).unwrap();

    let from_memory = decode(&memory, 0x4000).unwrap();
    let from_slice = decode_bytes(&code, 0, 0x4000).unwrap();

    assert_eq!(from_memory, from_slice);
    assert_eq!(render(&from_memory), "LHLD $1234");
}

#[test]
fn test_decode_past_end_of_memory() {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFE, &[0xC3, 0x00]).unwrap();

    assert_eq!(
        decode(&memory, 0xFFFE),
        Err(ExecutionError::OutOfBounds { address: 0x10000 })
    );
}

#[test]
fn test_conditional_mnemonics() {
    let code = [
        0xC0, 0xC8, 0xD0, 0xD8, 0xE0, 0xE8, 0xF0, 0xF8, // Rcc
    ];
    let lines = disassemble(&code).unwrap();
    let mnemonics: Vec<&str> = lines.iter().map(|l| &l[5..]).collect();

    assert_eq!(
        mnemonics,
        vec!["RNZ", "RZ", "RNC", "RC", "RPO", "RPE", "RP", "RM"]
    );
}
