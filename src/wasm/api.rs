//! WASM API for the 8080 emulator.
//!
//! Provides JavaScript-callable interfaces for loading hex programs, running
//! them, raising interrupts and inspecting registers and memory.

use crate::{
    decode, parse_hex, render, Emulator, EmulatorConfig, ExecutionError, FlatMemory, MemoryBus,
    PortLatch, RunState, StopReason,
};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Mnemonic and operands, e.g. `MVI A,#$05`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
///
/// Bytes written with OUT are passed to `on_output(port, value)` after each
/// `step` or `run` call.
#[wasm_bindgen]
pub struct Emulator8080 {
    emu: Emulator<FlatMemory, PortLatch>,
    on_output: js_sys::Function,
    config: EmulatorConfig,
    program: Vec<u8>,
}

#[wasm_bindgen]
impl Emulator8080 {
    /// Create an emulator with empty memory
    #[wasm_bindgen(constructor)]
    pub fn new(on_output: js_sys::Function) -> Self {
        let config = EmulatorConfig::default();
        Emulator8080 {
            emu: Emulator::with_config(Default::default(), PortLatch::new(), config),
            on_output,
            config,
            program: Vec::new(),
        }
    }

    /// Parse hex text and load it at `load_address`, starting execution there
    pub fn load_hex(&mut self, text: &str, load_address: u16) -> Result<(), JsError> {
        let program = parse_hex(text)?;
        self.config = EmulatorConfig {
            load_address,
            entry_point: load_address,
            ..self.config
        };
        self.emu = Emulator::from_program(&program, PortLatch::new(), self.config)?;
        self.program = program;
        Ok(())
    }

    /// Reload the last program and start over
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.emu = Emulator::from_program(&self.program, PortLatch::new(), self.config)?;
        Ok(())
    }

    /// Execute a single instruction; returns false once stopped
    pub fn step(&mut self) -> Result<bool, JsError> {
        self.emu.step();
        self.flush_output();
        self.check_stopped()
    }

    /// Execute up to `max_instructions`; returns false once stopped
    pub fn run(&mut self, max_instructions: u32) -> Result<bool, JsError> {
        self.emu.run_for(max_instructions as u64);
        self.flush_output();
        self.check_stopped()
    }

    /// Request an `RST vector` interrupt; returns whether it was accepted
    pub fn interrupt(&mut self, vector: u8) -> bool {
        self.emu.interrupt(vector)
    }

    /// Set the value the next `IN port` reads
    pub fn set_input(&mut self, port: u8, value: u8) {
        self.emu.ports_mut().set_input(port, value);
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        matches!(self.emu.run_state(), RunState::Stopped(StopReason::Halted))
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.emu.instructions_executed() as f64 // Convert u64 to f64 for JavaScript
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.emu.state().a()
    }

    #[wasm_bindgen(getter)]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.emu.state().b(), self.emu.state().c()])
    }

    #[wasm_bindgen(getter)]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.emu.state().d(), self.emu.state().e()])
    }

    #[wasm_bindgen(getter)]
    pub fn hl(&self) -> u16 {
        self.emu.state().hl()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.emu.state().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.emu.state().sp()
    }

    /// Packed flag byte (S Z 0 AC 0 P 1 C)
    #[wasm_bindgen(getter)]
    pub fn flags(&self) -> u8 {
        self.emu.state().flags().to_byte()
    }

    #[wasm_bindgen(getter)]
    pub fn interrupts_enabled(&self) -> bool {
        self.emu.state().interrupts_enabled()
    }

    // Memory access methods

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.emu.state().memory().read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.emu.state_mut().memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = usize::from(page) << 8;
        self.emu.state().memory().as_slice()[start..start + 0x100].to_vec()
    }

    /// Disassemble up to `count` instructions of memory starting at `start_addr`
    ///
    /// Stops early at the end of the address space.
    pub fn disassemble(&self, start_addr: u16, count: u32) -> js_sys::Array {
        let memory = self.emu.state().memory();
        let lines = js_sys::Array::new();
        let mut addr = start_addr;

        for _ in 0..count {
            let Ok(instr) = decode(memory, addr) else {
                break;
            };

            let mut bytes = vec![instr.opcode()];
            bytes.extend_from_slice(instr.operands());
            lines.push(&JsValue::from(DisassemblyLine {
                address: instr.address(),
                bytes,
                text: render(&instr),
            }));

            addr = instr.next_address();
            if addr < start_addr {
                break;
            }
        }

        lines
    }
}

impl Emulator8080 {
    fn flush_output(&mut self) {
        for (port, value) in self.emu.ports_mut().drain_writes() {
            let _ = self
                .on_output
                .call2(&JsValue::NULL, &JsValue::from(port), &JsValue::from(value));
        }
    }

    fn check_stopped(&self) -> Result<bool, JsError> {
        match self.emu.run_state() {
            RunState::Running => Ok(true),
            RunState::Stopped(StopReason::Error(err)) => Err(err.clone().into()),
            RunState::Stopped(_) => Ok(false),
        }
    }
}
