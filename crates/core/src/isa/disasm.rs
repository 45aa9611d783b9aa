//! Instruction disassembler.
//!
//! Converts an 8-bit instruction word into a human-readable mnemonic string
//! for debug tracing, logging, and test diagnostics. Two-word instructions
//! render their first word only; the continuation word is data and renders
//! through [`disassemble_operand`].
//!
//! # Usage
//!
//! ```
//! use pipe8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x21), "add r0, r1");
//! ```

use crate::isa::{Opcode, carry_sel, cond_sel, flow_sel, ra, rb, stack_sel, two_word_sel, unary_sel};

/// Register names for R0-R3.
const REG_NAMES: [&str; 4] = ["r0", "r1", "r2", "r3"];

/// Returns the name of a register index (masked to 2 bits upstream).
#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r?")
}

/// Disassembles an 8-bit instruction word into a mnemonic string.
///
/// Reserved encodings render as `"nop ; reserved"` to flag them in traces.
pub fn disassemble(word: u8) -> String {
    let a = ra(word);
    let b = rb(word);
    match Opcode::from_word(word) {
        Opcode::Nop => "nop".to_string(),
        Opcode::Mov => format!("mov {}, {}", reg(a), reg(b)),
        Opcode::Add => format!("add {}, {}", reg(a), reg(b)),
        Opcode::Sub => format!("sub {}, {}", reg(a), reg(b)),
        Opcode::And => format!("and {}, {}", reg(a), reg(b)),
        Opcode::Or => format!("or {}, {}", reg(a), reg(b)),
        Opcode::Carry => match a {
            carry_sel::RLC => format!("rlc {}", reg(b)),
            carry_sel::RRC => format!("rrc {}", reg(b)),
            carry_sel::SETC => "setc".to_string(),
            _ => "clrc".to_string(),
        },
        Opcode::Stack => match a {
            stack_sel::PUSH => format!("push {}", reg(b)),
            stack_sel::POP => format!("pop {}", reg(b)),
            stack_sel::OUT => format!("out {}", reg(b)),
            _ => format!("in {}", reg(b)),
        },
        Opcode::Unary => match a {
            unary_sel::NOT => format!("not {}", reg(b)),
            unary_sel::NEG => format!("neg {}", reg(b)),
            unary_sel::INC => format!("inc {}", reg(b)),
            _ => format!("dec {}", reg(b)),
        },
        Opcode::CondJump => match a {
            cond_sel::JZ => format!("jz {}", reg(b)),
            cond_sel::JN => format!("jn {}", reg(b)),
            cond_sel::JC => format!("jc {}", reg(b)),
            _ => format!("jv {}", reg(b)),
        },
        Opcode::Loop => format!("loop {}, {}", reg(a), reg(b)),
        Opcode::Flow => match a {
            flow_sel::JMP => format!("jmp {}", reg(b)),
            flow_sel::CALL => format!("call {}", reg(b)),
            flow_sel::RET => "ret".to_string(),
            _ => "rti".to_string(),
        },
        Opcode::TwoWord => match a {
            two_word_sel::LDM => format!("ldm {}", reg(b)),
            two_word_sel::LDD => format!("ldd {}", reg(b)),
            two_word_sel::STD => format!("std {}", reg(b)),
            _ => "nop ; reserved".to_string(),
        },
        Opcode::Ldi => format!("ldi {}, {}", reg(a), reg(b)),
        Opcode::Sti => format!("sti {}, {}", reg(a), reg(b)),
        Opcode::Reserved => "nop ; reserved".to_string(),
    }
}

/// Renders the continuation word of a two-word instruction.
pub fn disassemble_operand(word: u8) -> String {
    format!(".byte {word:#04x}")
}
