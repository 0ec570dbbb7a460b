//! Opcode table validation tests
//!
//! Verifies that the opcode metadata table is complete and accurate.

use lib8080::{lookup, AluOp, Operation, Register, RegisterPair, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(
        OPCODE_TABLE.len(),
        256,
        "Opcode table must have exactly 256 entries"
    );

    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert!(
            !metadata.mnemonic.is_empty(),
            "Opcode 0x{:02X} has empty mnemonic",
            opcode
        );
    }
}

#[test]
fn test_opcode_table_size_validation() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert!(
            metadata.size_bytes >= 1 && metadata.size_bytes <= 3,
            "Opcode 0x{:02X} has invalid size: {} (must be 1-3)",
            opcode,
            metadata.size_bytes
        );
        assert_eq!(metadata.immediate_bytes(), metadata.size_bytes - 1);
    }
}

#[test]
fn test_undocumented_opcodes() {
    let undocumented: Vec<u8> = OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_undocumented())
        .map(|(i, _)| i as u8)
        .collect();

    assert_eq!(
        undocumented,
        vec![0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38, 0xCB, 0xD9, 0xDD, 0xED, 0xFD]
    );

    for opcode in undocumented {
        let metadata = &OPCODE_TABLE[opcode as usize];
        let documented = &OPCODE_TABLE[metadata.alias_of.unwrap() as usize];

        assert!(!documented.is_undocumented());
        assert_eq!(metadata.operation, Operation::Nop);
        assert_eq!(metadata.size_bytes, 1);
        assert_eq!(metadata.operation, documented.operation);
    }
}

#[test]
fn test_mov_block_layout() {
    // 0x40-0x7F: MOV dst,src with dst in bits 3-5 and src in bits 0-2, except 0x76
    let order = [
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::H,
        Register::L,
        Register::M,
        Register::A,
    ];

    for opcode in 0x40u8..=0x7F {
        let metadata = &OPCODE_TABLE[opcode as usize];
        if opcode == 0x76 {
            assert_eq!(metadata.mnemonic, "HLT");
            continue;
        }

        let dst = order[((opcode >> 3) & 0x07) as usize];
        let src = order[(opcode & 0x07) as usize];
        assert_eq!(metadata.operation, Operation::Mov { dst, src });
    }
}

#[test]
fn test_alu_block_layout() {
    let ops = [
        AluOp::Add,
        AluOp::Adc,
        AluOp::Sub,
        AluOp::Sbb,
        AluOp::Ana,
        AluOp::Xra,
        AluOp::Ora,
        AluOp::Cmp,
    ];

    for opcode in 0x80u8..=0xBF {
        match OPCODE_TABLE[opcode as usize].operation {
            Operation::Alu(op, _) => assert_eq!(op, ops[((opcode >> 3) & 0x07) as usize]),
            other => panic!("0x{:02X} decoded as {:?}", opcode, other),
        }
    }

    // Immediate forms sit at 0xC6 + 8n
    for (n, op) in ops.iter().enumerate() {
        let opcode = 0xC6 + 8 * n;
        assert_eq!(OPCODE_TABLE[opcode].operation, Operation::AluImmediate(*op));
        assert_eq!(OPCODE_TABLE[opcode].size_bytes, 2);
    }
}

#[test]
fn test_register_pair_instructions() {
    assert_eq!(OPCODE_TABLE[0x01].operation, Operation::Lxi(RegisterPair::BC));
    assert_eq!(OPCODE_TABLE[0x31].operation, Operation::Lxi(RegisterPair::SP));
    assert_eq!(OPCODE_TABLE[0x23].operation, Operation::Inx(RegisterPair::HL));
    assert_eq!(OPCODE_TABLE[0x1B].operation, Operation::Dcx(RegisterPair::DE));
    assert_eq!(OPCODE_TABLE[0x39].operation, Operation::Dad(RegisterPair::SP));
}

#[test]
fn test_restart_vectors() {
    for n in 0..8u8 {
        let opcode = 0xC7 + 8 * n as usize;
        assert_eq!(OPCODE_TABLE[opcode].operation, Operation::Restart(n));
        assert_eq!(OPCODE_TABLE[opcode].mnemonic, "RST");
    }
}

#[test]
fn test_three_byte_instructions() {
    let three_byte: Vec<&str> = OPCODE_TABLE
        .iter()
        .filter(|m| m.size_bytes == 3 && !m.is_undocumented())
        .map(|m| m.mnemonic)
        .collect();

    for mnemonic in ["LXI", "SHLD", "LHLD", "STA", "LDA", "JMP", "CALL", "JNZ", "CPE"] {
        assert!(three_byte.contains(&mnemonic), "{} should be 3 bytes", mnemonic);
    }
    assert_eq!(three_byte.len(), 4 + 4 + 1 + 8 + 1 + 8);
}

#[test]
fn test_lookup_matches_table() {
    for opcode in 0..=255u8 {
        assert_eq!(lookup(opcode), &OPCODE_TABLE[opcode as usize]);
    }
    assert_eq!(lookup(0xFD).operation, Operation::Nop);
}
