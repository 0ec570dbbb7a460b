//! I/O port support for the `IN` and `OUT` instructions.
//!
//! The 8080 has a separate 256-port I/O space. The execution engine knows
//! nothing about what is attached to it; it calls an [`IoPorts`]
//! implementation supplied by the host.
//!
//! # Example
//!
//! ```rust
//! use lib8080::{load, step, PortLatch};
//!
//! // MVI A,$41 ; OUT $01
//! let mut state = load(&[0x3E, 0x41, 0xD3, 0x01]).unwrap();
//! let mut ports = PortLatch::new();
//!
//! step(&mut state, &mut ports).unwrap();
//! step(&mut state, &mut ports).unwrap();
//!
//! assert_eq!(ports.output(0x01), 0x41);
//! ```

use crate::ExecutionError;

/// Host side of the 8080 I/O space.
///
/// # Design
///
/// - **Mutable read**: reading a port may have side effects (e.g. popping a FIFO)
/// - **Fallible**: an implementation may reject a port with
///   [`ExecutionError::InvalidPortAccess`]; the emulation loop stops and
///   reports it
pub trait IoPorts {
    /// Value placed on the data bus by `IN port`.
    fn read_port(&mut self, port: u8) -> Result<u8, ExecutionError>;

    /// Value sent by `OUT port`.
    fn write_port(&mut self, port: u8, value: u8) -> Result<(), ExecutionError>;
}

impl<P: IoPorts + ?Sized> IoPorts for &mut P {
    fn read_port(&mut self, port: u8) -> Result<u8, ExecutionError> {
        (**self).read_port(port)
    }

    fn write_port(&mut self, port: u8, value: u8) -> Result<(), ExecutionError> {
        (**self).write_port(port, value)
    }
}

/// Nothing attached: every port reads 0 and writes are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPorts;

impl IoPorts for NullPorts {
    fn read_port(&mut self, _port: u8) -> Result<u8, ExecutionError> {
        Ok(0)
    }

    fn write_port(&mut self, _port: u8, _value: u8) -> Result<(), ExecutionError> {
        Ok(())
    }
}

/// A bank of 256 input and 256 output latches.
///
/// The host sets input values with [`set_input`](PortLatch::set_input); `IN`
/// reads them. `OUT` stores into the output latch and appends to a write log
/// the host can drain.
#[derive(Debug, Clone)]
pub struct PortLatch {
    inputs: [u8; 256],
    outputs: [u8; 256],
    writes: Vec<(u8, u8)>,
}

impl PortLatch {
    pub fn new() -> Self {
        Self {
            inputs: [0; 256],
            outputs: [0; 256],
            writes: Vec::new(),
        }
    }

    /// Sets the value the next `IN port` will read.
    pub fn set_input(&mut self, port: u8, value: u8) {
        self.inputs[port as usize] = value;
    }

    /// Last value written to `port`.
    pub fn output(&self, port: u8) -> u8 {
        self.outputs[port as usize]
    }

    /// Every `(port, value)` written since the last drain, oldest first.
    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    /// Removes and returns the write log.
    pub fn drain_writes(&mut self) -> Vec<(u8, u8)> {
        std::mem::take(&mut self.writes)
    }
}

impl Default for PortLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl IoPorts for PortLatch {
    fn read_port(&mut self, port: u8) -> Result<u8, ExecutionError> {
        Ok(self.inputs[port as usize])
    }

    fn write_port(&mut self, port: u8, value: u8) -> Result<(), ExecutionError> {
        self.outputs[port as usize] = value;
        self.writes.push((port, value));
        Ok(())
    }
}
