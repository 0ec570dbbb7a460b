//! 8080 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.

pub mod formatter;

use crate::config::DisassemblyOptions;
use crate::decoder::{decode_bytes, DecodedInstruction};
use crate::ExecutionError;

/// Iterator over the instructions in a byte slice.
///
/// Yields one decoded instruction per step. If the slice ends in the middle of
/// an instruction it yields a single [`ExecutionError::TruncatedInput`] and
/// then stops.
///
/// # Examples
///
/// ```
/// use lib8080::{Disassembler, DisassemblyOptions};
///
/// let bytes = [0x00, 0xC3, 0x05, 0x00];
/// let addresses: Vec<u16> = Disassembler::new(&bytes, DisassemblyOptions::default())
///     .map(|instr| instr.unwrap().address())
///     .collect();
///
/// assert_eq!(addresses, vec![0x0000, 0x0001]);
/// ```
pub struct Disassembler<'a> {
    bytes: &'a [u8],
    offset: usize,
    address: u16,
    failed: bool,
}

impl<'a> Disassembler<'a> {
    pub fn new(bytes: &'a [u8], options: DisassemblyOptions) -> Self {
        Self {
            bytes,
            offset: 0,
            address: options.start_address,
            failed: false,
        }
    }
}

impl Iterator for Disassembler<'_> {
    type Item = Result<DecodedInstruction, ExecutionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }

        match decode_bytes(self.bytes, self.offset, self.address) {
            Ok(instr) => {
                self.offset += instr.size_bytes() as usize;
                self.address = instr.next_address();
                Some(Ok(instr))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// # Arguments
///
/// * `bytes` - The machine code to disassemble
/// * `options` - Disassembly options controlling addresses
///
/// # Returns
///
/// A vector of decoded instructions, or the error for a trailing incomplete
/// instruction
pub fn disassemble_instructions(
    bytes: &[u8],
    options: DisassemblyOptions,
) -> Result<Vec<DecodedInstruction>, ExecutionError> {
    Disassembler::new(bytes, options).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_empty() {
        let instructions = disassemble_instructions(&[], DisassemblyOptions::default()).unwrap();
        assert!(instructions.is_empty());
    }

    #[test]
    fn test_start_address_offsets_every_instruction() {
        let options = DisassemblyOptions {
            start_address: 0x0100,
            ..DisassemblyOptions::default()
        };
        let instructions = disassemble_instructions(&[0x3E, 0x01, 0x76], options).unwrap();

        assert_eq!(instructions[0].address(), 0x0100);
        assert_eq!(instructions[1].address(), 0x0102);
    }

    #[test]
    fn test_iterator_stops_after_truncation() {
        let mut iter = Disassembler::new(&[0x00, 0x3E], DisassemblyOptions::default());

        assert!(iter.next().unwrap().is_ok());
        assert!(matches!(
            iter.next(),
            Some(Err(ExecutionError::TruncatedInput { address: 0x0001, .. }))
        ));
        assert!(iter.next().is_none());
    }
}
