//! Instruction decoder shared by the disassembler and the execution engine.

use crate::memory::{MemoryBus, MEMORY_SIZE};
use crate::opcodes::{lookup, OpcodeMetadata};
use crate::ExecutionError;

/// A single decoded instruction.
///
/// Created fresh for every decode; it borrows nothing and owns its immediate
/// bytes in stream order (low byte first). Only the decoder builds these, so
/// `size_bytes` always agrees with the opcode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedInstruction {
    address: u16,
    opcode: u8,
    /// Only the first `size_bytes - 1` are meaningful
    operand_bytes: [u8; 2],
    size_bytes: u8,
}

impl DecodedInstruction {
    /// Memory address where this instruction starts.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// The opcode byte value (0x00-0xFF).
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Total size in bytes (1-3 bytes: opcode + operands).
    pub fn size_bytes(&self) -> u8 {
        self.size_bytes
    }

    /// The opcode table entry for this instruction.
    pub fn metadata(&self) -> &'static OpcodeMetadata {
        lookup(self.opcode)
    }

    /// The immediate bytes actually present, in stream order.
    pub fn operands(&self) -> &[u8] {
        &self.operand_bytes[..usize::from(self.size_bytes.saturating_sub(1))]
    }

    /// The 8-bit immediate of a 2-byte instruction.
    pub fn immediate8(&self) -> u8 {
        self.operand_bytes[0]
    }

    /// The 16-bit immediate of a 3-byte instruction.
    ///
    /// The second byte in the stream is the high byte.
    pub fn immediate16(&self) -> u16 {
        u16::from_le_bytes(self.operand_bytes)
    }

    /// Address of the next sequential instruction.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.size_bytes as u16)
    }
}

/// Decode the instruction at `pc` in a 64KB memory image.
///
/// Fails with [`ExecutionError::OutOfBounds`] if the instruction would extend
/// past address 0xFFFF.
///
/// # Examples
///
/// ```
/// use lib8080::{decode, FlatMemory};
///
/// let memory = FlatMemory::from_image(0, &[0xC3, 0x34, 0x12]).unwrap();
/// let instr = decode(&memory, 0x0000).unwrap();
///
/// assert_eq!(instr.metadata().mnemonic, "JMP");
/// assert_eq!(instr.immediate16(), 0x1234);
/// ```
pub fn decode<M: MemoryBus>(memory: &M, pc: u16) -> Result<DecodedInstruction, ExecutionError> {
    let opcode = memory.read(pc);
    let size_bytes = lookup(opcode).size_bytes;

    let end = pc as usize + size_bytes as usize;
    if end > MEMORY_SIZE {
        return Err(ExecutionError::OutOfBounds {
            address: MEMORY_SIZE as u32,
        });
    }

    let mut operand_bytes = [0u8; 2];
    for (i, byte) in operand_bytes
        .iter_mut()
        .enumerate()
        .take(size_bytes as usize - 1)
    {
        *byte = memory.read(pc + 1 + i as u16);
    }

    Ok(DecodedInstruction {
        address: pc,
        opcode,
        operand_bytes,
        size_bytes,
    })
}

/// Decode the instruction starting at `offset` in a byte slice.
///
/// `address` is the address reported for the instruction. Fails with
/// [`ExecutionError::TruncatedInput`] if the slice ends before the
/// instruction's immediate bytes; operands are never zero-filled.
///
/// # Examples
///
/// ```
/// use lib8080::{decode_bytes, ExecutionError};
///
/// let instr = decode_bytes(&[0x3E, 0x05], 0, 0x0100).unwrap();
/// assert_eq!(instr.immediate8(), 0x05);
///
/// assert!(matches!(
///     decode_bytes(&[0x3E], 0, 0x0000),
///     Err(ExecutionError::TruncatedInput { .. })
/// ));
/// ```
pub fn decode_bytes(
    bytes: &[u8],
    offset: usize,
    address: u16,
) -> Result<DecodedInstruction, ExecutionError> {
    let available = bytes.len().saturating_sub(offset);
    let Some(&opcode) = bytes.get(offset) else {
        return Err(ExecutionError::TruncatedInput {
            address,
            needed: 1,
            available,
        });
    };

    let size_bytes = lookup(opcode).size_bytes;
    if available < size_bytes as usize {
        return Err(ExecutionError::TruncatedInput {
            address,
            needed: size_bytes,
            available,
        });
    }

    let mut operand_bytes = [0u8; 2];
    let operands = &bytes[offset + 1..offset + size_bytes as usize];
    operand_bytes[..operands.len()].copy_from_slice(operands);

    Ok(DecodedInstruction {
        address,
        opcode,
        operand_bytes,
        size_bytes,
    })
}
