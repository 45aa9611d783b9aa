//! Hand assembler: one helper per mnemonic.
//!
//! Each helper returns the encoded 8-bit word; two-word instructions return
//! the first word only, with the operand byte placed by the caller. Keeping
//! these as plain functions keeps test programs readable as listings:
//!
//! ```ignore
//! let prog = [ldm(0), 0x7F, inc(0), jmp(2)];
//! ```

use pipe8_core::isa::{
    Opcode, carry_sel, cond_sel, encode, flow_sel, stack_sel, two_word_sel, unary_sel,
};

pub fn nop() -> u8 {
    encode(Opcode::Nop, 0, 0)
}

pub fn mov(rd: u8, rs: u8) -> u8 {
    encode(Opcode::Mov, rd, rs)
}

pub fn add(rd: u8, rs: u8) -> u8 {
    encode(Opcode::Add, rd, rs)
}

pub fn sub(rd: u8, rs: u8) -> u8 {
    encode(Opcode::Sub, rd, rs)
}

pub fn and(rd: u8, rs: u8) -> u8 {
    encode(Opcode::And, rd, rs)
}

pub fn or(rd: u8, rs: u8) -> u8 {
    encode(Opcode::Or, rd, rs)
}

pub fn rlc(r: u8) -> u8 {
    encode(Opcode::Carry, carry_sel::RLC as u8, r)
}

pub fn rrc(r: u8) -> u8 {
    encode(Opcode::Carry, carry_sel::RRC as u8, r)
}

pub fn setc() -> u8 {
    encode(Opcode::Carry, carry_sel::SETC as u8, 0)
}

pub fn clrc() -> u8 {
    encode(Opcode::Carry, carry_sel::CLRC as u8, 0)
}

pub fn push(r: u8) -> u8 {
    encode(Opcode::Stack, stack_sel::PUSH as u8, r)
}

pub fn pop(r: u8) -> u8 {
    encode(Opcode::Stack, stack_sel::POP as u8, r)
}

pub fn out(r: u8) -> u8 {
    encode(Opcode::Stack, stack_sel::OUT as u8, r)
}

pub fn inp(r: u8) -> u8 {
    encode(Opcode::Stack, stack_sel::IN as u8, r)
}

pub fn not(r: u8) -> u8 {
    encode(Opcode::Unary, unary_sel::NOT as u8, r)
}

pub fn neg(r: u8) -> u8 {
    encode(Opcode::Unary, unary_sel::NEG as u8, r)
}

pub fn inc(r: u8) -> u8 {
    encode(Opcode::Unary, unary_sel::INC as u8, r)
}

pub fn dec(r: u8) -> u8 {
    encode(Opcode::Unary, unary_sel::DEC as u8, r)
}

pub fn jz(target: u8) -> u8 {
    encode(Opcode::CondJump, cond_sel::JZ as u8, target)
}

pub fn jn(target: u8) -> u8 {
    encode(Opcode::CondJump, cond_sel::JN as u8, target)
}

pub fn jc(target: u8) -> u8 {
    encode(Opcode::CondJump, cond_sel::JC as u8, target)
}

pub fn jv(target: u8) -> u8 {
    encode(Opcode::CondJump, cond_sel::JV as u8, target)
}

pub fn loop_(counter: u8, target: u8) -> u8 {
    encode(Opcode::Loop, counter, target)
}

pub fn jmp(target: u8) -> u8 {
    encode(Opcode::Flow, flow_sel::JMP as u8, target)
}

pub fn call(target: u8) -> u8 {
    encode(Opcode::Flow, flow_sel::CALL as u8, target)
}

pub fn ret() -> u8 {
    encode(Opcode::Flow, flow_sel::RET as u8, 0)
}

pub fn rti() -> u8 {
    encode(Opcode::Flow, flow_sel::RTI as u8, 0)
}

/// First word of `LDM rd, imm`; the immediate is the following byte.
pub fn ldm(rd: u8) -> u8 {
    encode(Opcode::TwoWord, two_word_sel::LDM as u8, rd)
}

/// First word of `LDD rd, [addr]`; the address is the following byte.
pub fn ldd(rd: u8) -> u8 {
    encode(Opcode::TwoWord, two_word_sel::LDD as u8, rd)
}

/// First word of `STD rs, [addr]`; the address is the following byte.
pub fn std_(rs: u8) -> u8 {
    encode(Opcode::TwoWord, two_word_sel::STD as u8, rs)
}

/// `LDI addr_reg, rd` — `rd <- dmem[addr_reg]`.
pub fn ldi(addr: u8, rd: u8) -> u8 {
    encode(Opcode::Ldi, addr, rd)
}

/// `STI data_reg, addr_reg` — `dmem[addr_reg] <- data_reg`.
pub fn sti(data: u8, addr: u8) -> u8 {
    encode(Opcode::Sti, data, addr)
}
