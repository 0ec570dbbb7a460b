//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the machine state from
//! a specific memory implementation, and `FlatMemory`, a full 64KB RAM image.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 8080 hardware behavior:
//! - Addresses are 16 bits wide, so every address names a byte
//! - No bus errors - reads/writes of a single byte always succeed
//! - Writes to ROM/unmapped regions may be ignored by an implementation
//!
//! Multi-byte accesses that would run past 0xFFFF are rejected one level up, in
//! [`MachineState`](crate::MachineState), not here.

use crate::ExecutionError;

/// Size of the 8080 address space in bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Memory bus trait for the CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use lib8080::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lib8080::MemoryBus;
///
/// /// 8KB ROM followed by RAM; ROM writes are dropped.
/// struct RomRam {
///     data: Vec<u8>,
/// }
///
/// impl MemoryBus for RomRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.data[addr as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr >= 0x2000 {
///             self.data[addr as usize] = value;
///         }
///     }
/// }
///
/// let mut mem = RomRam { data: vec![0; 0x10000] };
/// mem.write(0x0000, 0xFF);
/// mem.write(0x2000, 0xFF);
/// assert_eq!(mem.read(0x0000), 0x00);
/// assert_eq!(mem.read(0x2000), 0xFF);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00, so
/// bytes beyond a loaded image read as zero.
///
/// # Examples
///
/// ```
/// use lib8080::{FlatMemory, MemoryBus};
///
/// let memory = FlatMemory::from_image(0x0100, &[0x3E, 0x05]).unwrap();
/// assert_eq!(memory.read(0x0100), 0x3E);
/// assert_eq!(memory.read(0x0102), 0x00);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Creates memory holding `image` at `origin`.
    ///
    /// Fails with [`ExecutionError::OutOfBounds`] if the image does not fit
    /// between `origin` and 0xFFFF.
    pub fn from_image(origin: u16, image: &[u8]) -> Result<Self, ExecutionError> {
        let mut memory = Self::new();
        memory.load(origin, image)?;
        Ok(memory)
    }

    /// Copies `image` into memory starting at `origin`.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<(), ExecutionError> {
        let start = origin as usize;
        let end = start + image.len();
        if end > MEMORY_SIZE {
            return Err(ExecutionError::OutOfBounds {
                address: MEMORY_SIZE as u32,
            });
        }
        self.data[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Returns the whole 64KB image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
