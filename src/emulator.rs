//! # Emulation Loop
//!
//! [`Emulator`] owns one [`MachineState`] and the port interface it talks to,
//! and drives decode/execute one instruction at a time.
//!
//! The loop has two states. It starts [`RunState::Running`] and moves to
//! [`RunState::Stopped`] when the program executes HLT, when an instruction
//! fails, or when the configured instruction limit is reached. Stopped is
//! terminal: further calls to [`Emulator::step`] or [`Emulator::run`] do
//! nothing and report the same reason.

use crate::config::EmulatorConfig;
use crate::decoder::decode;
use crate::disassembler::formatter::render;
use crate::instructions::{branches, execute, ExecResult};
use crate::memory::{FlatMemory, MemoryBus};
use crate::ports::{IoPorts, NullPorts};
use crate::state::MachineState;
use crate::ExecutionError;

/// Why the emulation loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The program executed HLT
    Halted,
    /// `EmulatorConfig::instruction_limit` instructions were executed
    InstructionLimit,
    /// Decode or execute failed; PC still points at the faulting instruction
    Error(ExecutionError),
}

/// State of the emulation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped(StopReason),
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

/// Summary returned when a run ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalResult {
    /// Why execution stopped
    pub reason: StopReason,

    /// Instructions that completed, HLT included, the faulting one excluded
    pub instructions_executed: u64,
}

impl FinalResult {
    /// The error that stopped the run, if any.
    pub fn error(&self) -> Option<&ExecutionError> {
        match &self.reason {
            StopReason::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_halted(&self) -> bool {
        self.reason == StopReason::Halted
    }
}

/// An 8080 emulation session.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (defaults to [`FlatMemory`])
/// * `P` - Port interface used by IN and OUT (defaults to [`NullPorts`])
///
/// # Examples
///
/// ```
/// use lib8080::{Emulator, EmulatorConfig, PortLatch, StopReason};
///
/// // MVI A,$41; OUT $02; HLT
/// let program = [0x3E, 0x41, 0xD3, 0x02, 0x76];
/// let mut emu =
///     Emulator::from_program(&program, PortLatch::new(), EmulatorConfig::default()).unwrap();
///
/// let result = emu.run();
/// assert_eq!(result.reason, StopReason::Halted);
/// assert_eq!(result.instructions_executed, 3);
/// assert_eq!(emu.ports().output(0x02), 0x41);
/// ```
pub struct Emulator<M: MemoryBus = FlatMemory, P: IoPorts = NullPorts> {
    state: MachineState<M>,
    ports: P,
    config: EmulatorConfig,
    run_state: RunState,
    instructions: u64,
}

impl<P: IoPorts> Emulator<FlatMemory, P> {
    /// Loads `program` at `config.load_address` and starts at `config.entry_point`.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::OutOfBounds`] if the program does not fit above the
    /// load address.
    pub fn from_program(
        program: &[u8],
        ports: P,
        config: EmulatorConfig,
    ) -> Result<Self, ExecutionError> {
        let memory = FlatMemory::from_image(config.load_address, program)?;
        let state = MachineState::with_entry(memory, config.entry_point);
        Ok(Self::with_config(state, ports, config))
    }
}

impl<M: MemoryBus, P: IoPorts> Emulator<M, P> {
    /// Wraps an existing state with the default configuration.
    pub fn new(state: MachineState<M>, ports: P) -> Self {
        Self::with_config(state, ports, EmulatorConfig::default())
    }

    /// Wraps an existing state. `config.load_address` and `config.entry_point`
    /// are not applied; the state is used as given.
    pub fn with_config(state: MachineState<M>, ports: P, config: EmulatorConfig) -> Self {
        Self {
            state,
            ports,
            config,
            run_state: RunState::Running,
            instructions: 0,
        }
    }

    // ========== Execution ==========

    /// Executes one instruction and returns the resulting loop state.
    ///
    /// Once stopped, returns the stop reason without touching the machine.
    pub fn step(&mut self) -> &RunState {
        if !self.run_state.is_running() {
            return &self.run_state;
        }

        if let Some(limit) = self.config.instruction_limit {
            if self.instructions >= limit {
                self.stop(StopReason::InstructionLimit);
                return &self.run_state;
            }
        }

        match self.execute_next() {
            Ok(ExecResult::Continue) => {}
            Ok(ExecResult::Halted) => self.stop(StopReason::Halted),
            Err(err) => self.stop(StopReason::Error(err)),
        }

        &self.run_state
    }

    /// Runs until the loop stops.
    ///
    /// With `instruction_limit` unset a program that never halts keeps this
    /// call spinning; use [`run_for`](Self::run_for) to stay in control.
    pub fn run(&mut self) -> FinalResult {
        loop {
            self.step();
            if let RunState::Stopped(reason) = &self.run_state {
                return FinalResult {
                    reason: reason.clone(),
                    instructions_executed: self.instructions,
                };
            }
        }
    }

    /// Executes at most `max_instructions` instructions.
    ///
    /// Returns early if the loop stops. Using up `max_instructions` is not a stop;
    /// the next call continues where this one left off.
    pub fn run_for(&mut self, max_instructions: u64) -> &RunState {
        for _ in 0..max_instructions {
            if !self.step().is_running() {
                break;
            }
        }
        &self.run_state
    }

    /// Requests a maskable interrupt that executes `RST vector`.
    ///
    /// Accepted only while running with interrupts enabled: the current PC is
    /// pushed, control moves to `vector * 8` and interrupts are disabled.
    /// Returns whether the request was accepted.
    pub fn interrupt(&mut self, vector: u8) -> bool {
        if !self.run_state.is_running() {
            log::debug!("interrupt {} ignored: emulator stopped", vector);
            return false;
        }

        let accepted = branches::service_interrupt(&mut self.state, vector);
        if accepted {
            log::debug!("interrupt {} accepted, vectoring to ${:04X}", vector, self.state.pc());
        } else {
            log::debug!("interrupt {} ignored: interrupts disabled", vector);
        }
        accepted
    }

    fn execute_next(&mut self) -> Result<ExecResult, ExecutionError> {
        let instr = decode(&self.state.memory, self.state.pc)?;
        if self.config.trace {
            log::trace!("{:04X} {}", instr.address(), render(&instr));
        }

        let result = execute(&instr, &mut self.state, &mut self.ports)?;
        self.instructions += 1;
        Ok(result)
    }

    fn stop(&mut self, reason: StopReason) {
        log::debug!(
            "stopped at ${:04X} after {} instructions: {:?}",
            self.state.pc(),
            self.instructions,
            reason
        );
        self.run_state = RunState::Stopped(reason);
    }

    // ========== Accessors ==========

    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub fn instructions_executed(&self) -> u64 {
        self.instructions
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn state(&self) -> &MachineState<M> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MachineState<M> {
        &mut self.state
    }

    pub fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    /// Gives back the machine state and ports.
    pub fn into_parts(self) -> (MachineState<M>, P) {
        (self.state, self.ports)
    }
}
