//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use lib8080::{render_line, Disassembler, DisassemblyOptions, ExecutionError};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
    show_bytes: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.start_address,
        show_bytes: input.show_bytes,
    };

    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for decoded in Disassembler::new(&input.bytes, options) {
        match decoded {
            Ok(instr) => {
                assert_eq!(instr.address(), expected_address);
                assert!(instr.size_bytes() >= 1 && instr.size_bytes() <= 3);

                let line = render_line(&instr, &options);
                assert!(line.starts_with(&format!("{:04X} ", instr.address())));

                total_size += instr.size_bytes() as usize;
                expected_address = expected_address.wrapping_add(instr.size_bytes() as u16);
            }
            Err(ExecutionError::TruncatedInput { available, needed, .. }) => {
                // Only the tail can be short
                assert!(available < needed as usize);
                total_size += available;
            }
            Err(err) => panic!("unexpected error {err}"),
        }
    }

    // Every input byte is accounted for
    assert_eq!(total_size, input.bytes.len());
});
