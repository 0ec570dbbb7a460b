//! Fuzz target for the hex byte-stream reader.

#![no_main]

use lib8080::{parse_hex, ExecutionError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    match parse_hex(text) {
        Ok(bytes) => {
            let digits = text.chars().filter(|c| c.is_ascii_hexdigit()).count();
            assert_eq!(bytes.len(), digits / 2);
        }
        Err(ExecutionError::InvalidHexDigit { position, found }) => {
            assert_eq!(text.chars().nth(position), Some(found));
            assert!(!found.is_ascii_hexdigit() && !found.is_ascii_whitespace());
        }
        Err(err) => panic!("unexpected error {err}"),
    }
});
