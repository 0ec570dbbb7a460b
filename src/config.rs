//! Option structs for disassembly and emulation.

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Address of the first input byte (affects address display)
    pub start_address: u16,

    /// Whether to print the encoded bytes between the address and the mnemonic
    pub show_bytes: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x0000,
            show_bytes: false,
        }
    }
}

/// Options controlling how an image is loaded and run.
///
/// # Examples
///
/// ```
/// use lib8080::EmulatorConfig;
///
/// // CP/M-style program at 0x0100, give up after a million instructions
/// let config = EmulatorConfig {
///     load_address: 0x0100,
///     entry_point: 0x0100,
///     instruction_limit: Some(1_000_000),
///     ..EmulatorConfig::default()
/// };
/// assert!(!config.trace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Address the first image byte is copied to
    pub load_address: u16,

    /// Initial program counter
    pub entry_point: u16,

    /// Stop `run` after this many instructions
    pub instruction_limit: Option<u64>,

    /// Log every executed instruction at trace level
    pub trace: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            load_address: 0x0000,
            entry_point: 0x0000,
            instruction_limit: None,
            trace: false,
        }
    }
}
