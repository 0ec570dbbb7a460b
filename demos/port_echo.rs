//! Example of a custom port interface.
//!
//! The program reads characters from port 0 and echoes them to port 1 until
//! it reads a zero byte, then halts:
//!
//! ```text
//! 0000 IN $00
//! 0002 ORA A
//! 0003 JZ $000B
//! 0006 OUT $01
//! 0008 JMP $0000
//! 000B HLT
//! ```
//!
//! Run with: `cargo run --example port_echo`

use lib8080::{Emulator, EmulatorConfig, ExecutionError, IoPorts, StopReason};
use std::collections::VecDeque;
use std::io::Write;

/// Serial-style ports: port 0 pops queued input, port 1 prints.
struct Terminal {
    input: VecDeque<u8>,
    echoed: usize,
}

impl IoPorts for Terminal {
    fn read_port(&mut self, port: u8) -> Result<u8, ExecutionError> {
        match port {
            0x00 => Ok(self.input.pop_front().unwrap_or(0)),
            _ => Err(ExecutionError::InvalidPortAccess { port }),
        }
    }

    fn write_port(&mut self, port: u8, value: u8) -> Result<(), ExecutionError> {
        match port {
            0x01 => {
                print!("{}", value as char);
                let _ = std::io::stdout().flush();
                self.echoed += 1;
                Ok(())
            }
            _ => Err(ExecutionError::InvalidPortAccess { port }),
        }
    }
}

fn main() {
    println!("8080 Port Echo Example");
    println!("======================\n");

    let program = [
        0xDB, 0x00, // IN $00
        0xB7, // ORA A
        0xCA, 0x0B, 0x00, // JZ $000B
        0xD3, 0x01, // OUT $01
        0xC3, 0x00, 0x00, // JMP $0000
        0x76, // HLT
    ];

    let terminal = Terminal {
        input: b"Hello, 8080!\n".iter().copied().collect(),
        echoed: 0,
    };

    let config = EmulatorConfig {
        instruction_limit: Some(10_000),
        ..EmulatorConfig::default()
    };

    let mut emu = match Emulator::from_program(&program, terminal, config) {
        Ok(emu) => emu,
        Err(err) => {
            eprintln!("load failed: {}", err);
            return;
        }
    };

    let result = emu.run();
    println!();

    match result.reason {
        StopReason::Halted => println!(
            "Halted after {} instructions, echoed {} bytes",
            result.instructions_executed,
            emu.ports().echoed
        ),
        StopReason::InstructionLimit => {
            println!("Gave up after {} instructions", result.instructions_executed)
        }
        StopReason::Error(err) => println!("Stopped with error: {}", err),
    }
}
