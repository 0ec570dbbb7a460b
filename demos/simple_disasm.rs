//! Basic disassembler usage example
//!
//! Disassembles a hex file given on the command line, or a built-in program.
//! Run with: `cargo run --example simple_disasm [program.hex]`

use lib8080::{read_hex, render_line, Disassembler, DisassemblyOptions};
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let code = match std::env::args().nth(1) {
        Some(path) => read_hex(File::open(path)?)?,
        None => vec![
            0x31, 0x00, 0x24, // LXI SP,#$2400
            0x3E, 0x05, // MVI A,#$05
            0x06, 0x03, // MVI B,#$03
            0x80, // ADD B
            0xCD, 0x10, 0x01, // CALL $0110
            0x76, // HLT
        ],
    };

    let options = DisassemblyOptions {
        start_address: 0x0100,
        show_bytes: true,
    };

    println!("Disassembled code:");
    for instr in Disassembler::new(&code, options) {
        println!("{}", render_line(&instr?, &options));
    }

    Ok(())
}
