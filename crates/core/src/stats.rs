//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the processor core. It
//! provides:
//! 1. **Cycle and CPI:** Total ticks, retired instructions, and the derived
//!    cycles-per-instruction figure.
//! 2. **Instruction mix:** Retirement counts by category (ALU, memory,
//!    stack/port, control flow).
//! 3. **Hazards:** Load-use stalls, control-flow flushes, and interrupt
//!    entries.
//!
//! Counters are plain fields the pipeline bumps directly; the struct
//! serializes to JSON for tooling.

use serde::Serialize;

use crate::isa::Opcode;

/// Simulation statistics tracking all per-tick and per-retire counters.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SimStats {
    /// Total clock ticks elapsed.
    pub cycles: u64,
    /// Instructions retired (bubbles excluded).
    pub retired: u64,

    /// ALU-class instructions retired (MOV, arithmetic, logic, carry, unary).
    pub inst_alu: u64,
    /// Memory-class instructions retired (LDM, LDD, STD, LDI, STI).
    pub inst_mem: u64,
    /// Stack and port instructions retired (PUSH, POP, OUT, IN).
    pub inst_stack: u64,
    /// Control-flow instructions retired (jumps, LOOP, CALL, RET, RTI).
    pub inst_flow: u64,
    /// NOPs retired (including the reserved encoding).
    pub inst_nop: u64,

    /// Decode ticks lost to load-use stalls.
    pub load_use_stalls: u64,
    /// Fetch slots squashed by taken jumps, returns, and interrupt entry.
    pub flushes: u64,
    /// Interrupt entries taken.
    pub interrupts: u64,
}

impl SimStats {
    /// Records one retired instruction and its category.
    ///
    /// Two-word instructions retire exactly once: the first-word slot
    /// travels as a bubble and the continuation slot carries a
    /// re-synthesized word, so the classification lands in the right
    /// bucket.
    pub fn retire(&mut self, inst: u8) {
        self.retired += 1;
        match Opcode::from_word(inst) {
            Opcode::Nop | Opcode::Reserved => self.inst_nop += 1,
            Opcode::Mov
            | Opcode::Add
            | Opcode::Sub
            | Opcode::And
            | Opcode::Or
            | Opcode::Carry
            | Opcode::Unary => self.inst_alu += 1,
            Opcode::TwoWord | Opcode::Ldi | Opcode::Sti => self.inst_mem += 1,
            Opcode::Stack => self.inst_stack += 1,
            Opcode::CondJump | Opcode::Loop | Opcode::Flow => self.inst_flow += 1,
        }
    }

    /// Cycles per retired instruction; zero before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.retired as f64
        }
    }
}
