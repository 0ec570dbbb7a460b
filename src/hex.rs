//! Hex byte-stream reader.
//!
//! Program images are supplied as text: two hex digits per byte, separated by
//! any amount of ASCII whitespace, e.g. `"3E 05 C3 00 00"`. Digits are paired
//! in the order they appear, so a pair may be split by whitespace (`"3 E"` is
//! `0x3E`). A trailing unpaired digit is dropped.

use std::io::{self, Read};

use crate::ExecutionError;

/// Parse hex text into bytes.
///
/// # Errors
///
/// [`ExecutionError::InvalidHexDigit`] for the first character that is
/// neither a hex digit nor whitespace. `position` counts characters, not bytes.
///
/// # Examples
///
/// ```
/// use lib8080::parse_hex;
///
/// assert_eq!(parse_hex("3E 05\nC3 00 00").unwrap(), vec![0x3E, 0x05, 0xC3, 0x00, 0x00]);
///
/// // Trailing half byte is ignored
/// assert_eq!(parse_hex("76 0").unwrap(), vec![0x76]);
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u8>, ExecutionError> {
    let mut bytes = Vec::with_capacity(text.len() / 3 + 1);
    let mut high: Option<u8> = None;

    for (position, found) in text.chars().enumerate() {
        if found.is_ascii_whitespace() {
            continue;
        }

        let digit = found
            .to_digit(16)
            .ok_or(ExecutionError::InvalidHexDigit { position, found })? as u8;

        match high.take() {
            Some(h) => bytes.push((h << 4) | digit),
            None => high = Some(digit),
        }
    }

    Ok(bytes)
}

/// Read hex text from `reader` and parse it with [`parse_hex`].
///
/// # Errors
///
/// I/O errors are passed through. Input that is not UTF-8 or contains an
/// invalid digit is reported as [`io::ErrorKind::InvalidData`]; for the
/// latter the inner error is the [`ExecutionError`].
pub fn read_hex<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_hex(&text).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
