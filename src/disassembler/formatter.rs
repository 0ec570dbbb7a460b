//! Formatting functions for decoded instructions

use crate::config::DisassemblyOptions;
use crate::decoder::DecodedInstruction;
use crate::opcodes::Operation;

/// Placeholder mnemonic for undocumented encodings.
pub const UNDOCUMENTED: &str = "???";

/// Format a single instruction as assembly text
///
/// Undocumented encodings render as `???` followed by the raw opcode so a
/// listing never passes them off as the instruction they alias.
///
/// # Examples
///
/// ```
/// use lib8080::{decode_bytes, render};
///
/// let jmp = decode_bytes(&[0xC3, 0x05, 0x00], 0, 0).unwrap();
/// assert_eq!(render(&jmp), "JMP $0005");
///
/// let alias = decode_bytes(&[0x08], 0, 0).unwrap();
/// assert_eq!(render(&alias), "??? $08");
/// ```
pub fn render(instr: &DecodedInstruction) -> String {
    let metadata = instr.metadata();
    if metadata.is_undocumented() {
        return format!("{} ${:02X}", UNDOCUMENTED, instr.opcode());
    }

    let operand = format_operand(instr);
    if operand.is_empty() {
        metadata.mnemonic.to_string()
    } else {
        format!("{} {}", metadata.mnemonic, operand)
    }
}

/// Format a listing line: 4-digit hex address, one space, instruction text.
///
/// With `show_bytes` the encoded bytes are printed in an 8-column field
/// between the address and the text.
pub fn render_line(instr: &DecodedInstruction, options: &DisassemblyOptions) -> String {
    if options.show_bytes {
        let mut encoded = format!("{:02X}", instr.opcode());
        for byte in instr.operands() {
            encoded.push_str(&format!(" {:02X}", byte));
        }
        format!("{:04X} {:<8} {}", instr.address(), encoded, render(instr))
    } else {
        format!("{:04X} {}", instr.address(), render(instr))
    }
}

/// Format the operand field from the table's operation
fn format_operand(instr: &DecodedInstruction) -> String {
    use Operation::*;

    match instr.metadata().operation {
        Mov { dst, src } => format!("{},{}", dst.name(), src.name()),
        Mvi(reg) => format!("{},#${:02X}", reg.name(), instr.immediate8()),
        Lxi(pair) => format!("{},#${:04X}", pair.name(), instr.immediate16()),
        Lda | Sta | Lhld | Shld | Jump(_) | Call(_) => format!("${:04X}", instr.immediate16()),
        Ldax(pair) | Stax(pair) | Inx(pair) | Dcx(pair) | Dad(pair) => pair.name().to_string(),
        Alu(_, reg) | Inr(reg) | Dcr(reg) => reg.name().to_string(),
        AluImmediate(_) => format!("#${:02X}", instr.immediate8()),
        In | Out => format!("${:02X}", instr.immediate8()),
        Restart(vector) => vector.to_string(),
        Push(pair) | Pop(pair) => pair.name().to_string(),
        Nop | Xchg | Daa | Rlc | Rrc | Ral | Rar | Cma | Stc | Cmc | Return(_) | Pchl | Xthl
        | Sphl | Ei | Di | Hlt => String::new(),
    }
}
