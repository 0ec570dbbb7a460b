//! Tests for IN, OUT, EI, DI and interrupt delivery.

use lib8080::{
    load, step, Emulator, EmulatorConfig, ExecResult, ExecutionError, IoPorts, MachineState,
    NullPorts, PortLatch, RunState, StopReason,
};

/// Port interface that only knows port 0x10 and records traffic
#[derive(Default)]
struct SinglePort {
    value: u8,
    reads: usize,
}

impl IoPorts for SinglePort {
    fn read_port(&mut self, port: u8) -> Result<u8, ExecutionError> {
        if port != 0x10 {
            return Err(ExecutionError::InvalidPortAccess { port });
        }
        self.reads += 1;
        Ok(self.value)
    }

    fn write_port(&mut self, port: u8, value: u8) -> Result<(), ExecutionError> {
        if port != 0x10 {
            return Err(ExecutionError::InvalidPortAccess { port });
        }
        self.value = value;
        Ok(())
    }
}

fn setup(program: &[u8]) -> MachineState {
    load(program).unwrap()
}

#[test]
fn test_in_from_null_ports_reads_zero() {
    let mut state = setup(&[0xDB, 0x42]); // IN $42
    state.set_a(0xFF);

    assert_eq!(step(&mut state, &mut NullPorts), Ok(ExecResult::Continue));
    assert_eq!(state.a(), 0x00);
    assert_eq!(state.pc(), 0x0002);
}

#[test]
fn test_out_then_in_through_custom_ports() {
    // MVI A,$3C; OUT $10; MVI A,$00; IN $10
    let mut state = setup(&[0x3E, 0x3C, 0xD3, 0x10, 0x3E, 0x00, 0xDB, 0x10]);
    let mut ports = SinglePort::default();
    for _ in 0..4 {
        step(&mut state, &mut ports).unwrap();
    }

    assert_eq!(state.a(), 0x3C);
    assert_eq!(ports.reads, 1);
}

#[test]
fn test_rejected_port_stops_emulator() {
    // NOP; OUT $11
    let state = setup(&[0x00, 0xD3, 0x11]);
    let mut emu = Emulator::new(state, SinglePort::default());
    let result = emu.run();

    assert_eq!(
        result.reason,
        StopReason::Error(ExecutionError::InvalidPortAccess { port: 0x11 })
    );
    assert_eq!(result.instructions_executed, 1);
    assert_eq!(emu.state().pc(), 0x0001);
}

#[test]
fn test_port_latch_records_writes() {
    // MVI A,$48; OUT $01; MVI A,$69; OUT $01; IN $02; OUT $03; HLT
    let program = [
        0x3E, 0x48, 0xD3, 0x01, 0x3E, 0x69, 0xD3, 0x01, 0xDB, 0x02, 0xD3, 0x03, 0x76,
    ];
    let mut ports = PortLatch::new();
    ports.set_input(0x02, 0x21);

    let mut emu = Emulator::from_program(&program, ports, EmulatorConfig::default()).unwrap();
    assert!(emu.run().is_halted());

    let ports = emu.ports_mut();
    assert_eq!(ports.output(0x01), 0x69);
    assert_eq!(ports.drain_writes(), vec![(0x01, 0x48), (0x01, 0x69), (0x03, 0x21)]);
    assert!(ports.writes().is_empty());
}

#[test]
fn test_ei_di() {
    let mut state = setup(&[0xFB, 0xF3]); // EI; DI
    assert!(!state.interrupts_enabled());

    step(&mut state, &mut NullPorts).unwrap();
    assert!(state.interrupts_enabled());

    step(&mut state, &mut NullPorts).unwrap();
    assert!(!state.interrupts_enabled());
}

#[test]
fn test_interrupt_handler_round_trip() {
    // 0000 LXI SP,$2400; 0003 EI; 0004 JMP $0004
    // 0010 (RST 2) INR B; 0011 EI; 0012 RET
    let mut program = vec![0u8; 0x13];
    program[..7].copy_from_slice(&[0x31, 0x00, 0x24, 0xFB, 0xC3, 0x04, 0x00]);
    program[0x10..].copy_from_slice(&[0x04, 0xFB, 0xC9]);

    let mut emu = Emulator::from_program(&program, NullPorts, EmulatorConfig::default()).unwrap();
    assert_eq!(emu.run_for(5), &RunState::Running);
    assert_eq!(emu.state().pc(), 0x0004);

    assert!(emu.interrupt(2));
    assert_eq!(emu.state().pc(), 0x0010);
    assert!(!emu.interrupt(2));

    emu.run_for(3);
    assert_eq!(emu.state().b(), 1);
    assert_eq!(emu.state().pc(), 0x0004);
    assert_eq!(emu.state().sp(), 0x2400);
    assert!(emu.state().interrupts_enabled());
}

#[test]
fn test_interrupt_ignored_after_stop() {
    let state = setup(&[0xFB, 0x76]); // EI; HLT
    let mut emu = Emulator::new(state, NullPorts);
    emu.run();

    assert!(emu.state().interrupts_enabled());
    assert!(!emu.interrupt(0));
}
