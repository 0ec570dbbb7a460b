//! Tests for loading programs from hex text.

use lib8080::{disassemble, load, parse_hex, read_hex, run, ExecutionError, NullPorts};
use std::io::{self, Read};

#[test]
fn test_hex_program_runs() {
    let bytes = parse_hex("3E 05 06 03\n80 76\n").unwrap();
    let mut state = load(&bytes).unwrap();
    let result = run(&mut state, &mut NullPorts);

    assert!(result.is_halted());
    assert_eq!(state.a(), 8);
}

#[test]
fn test_hex_listing() {
    let bytes = read_hex("00 C3 05 00".as_bytes()).unwrap();
    assert_eq!(disassemble(&bytes).unwrap(), vec!["0000 NOP", "0001 JMP $0005"]);
}

#[test]
fn test_unpaired_trailing_character_is_ignored() {
    assert_eq!(parse_hex("3E 05 7").unwrap(), vec![0x3E, 0x05]);
}

#[test]
fn test_invalid_character_position() {
    assert_eq!(
        parse_hex("00\n0x"),
        Err(ExecutionError::InvalidHexDigit {
            position: 4,
            found: 'x',
        })
    );
}

#[test]
fn test_reader_errors_pass_through() {
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    assert_eq!(read_hex(Broken).unwrap_err().kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_reader_invalid_digit_keeps_source() {
    let err = read_hex("12 3Q".as_bytes()).unwrap_err();
    let inner = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<ExecutionError>())
        .cloned();

    assert_eq!(
        inner,
        Some(ExecutionError::InvalidHexDigit {
            position: 4,
            found: 'Q',
        })
    );
}
