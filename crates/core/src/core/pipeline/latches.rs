//! Pipeline latch structures for inter-stage communication.
//!
//! One plain-old-data entry type per stage boundary:
//! Fetch -> Decode -> Execute -> Memory -> Writeback.
//!
//! Each entry is a snapshot of everything the next stage needs, including
//! the residual control signals and the 8-bit PC of the instruction (needed
//! for return-address computation). `Default` is the all-zero no-op signal
//! pattern the decode paths build real entries over; `empty()` is the
//! bubble slot the latches hold at reset and after a stall or flush.
//! `bubble` distinguishes a squashed slot from a real instruction for
//! retirement counting and forwarding guards — an empty slot must never
//! retire.

use crate::core::pipeline::signals::{ControlSignals, WbSel};

/// Entry in the Fetch/Decode latch.
#[derive(Clone, Copy, Debug)]
pub struct IfIdEntry {
    /// Program counter of the fetched word.
    pub pc: u8,
    /// The raw 8-bit word (an instruction, or the operand word of a
    /// two-word instruction).
    pub inst: u8,
    /// True for a flush-inserted no-op slot.
    pub bubble: bool,
}

impl Default for IfIdEntry {
    fn default() -> Self {
        Self {
            pc: 0,
            inst: 0,
            bubble: true,
        }
    }
}

/// Entry in the Decode/Execute latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u8,
    /// Raw word, kept for trace output.
    pub inst: u8,
    /// True for a bubble slot.
    pub bubble: bool,
    /// First source register address (ALU operand A).
    pub rs1: usize,
    /// Second source register address (ALU operand B / store data).
    pub rs2: usize,
    /// `rs1` names a register the instruction actually reads.
    pub s1_valid: bool,
    /// `rs2` names a register the instruction actually reads.
    pub s2_valid: bool,
    /// Destination register address.
    pub rd: usize,
    /// Latched immediate: captured operand word, or the CALL/interrupt link.
    pub imm: u8,
    /// Address latched at decode (stack pointer or captured word).
    pub mem_addr: u8,
    /// Control signals for this and all later stages.
    pub ctrl: ControlSignals,
}

impl IdExEntry {
    /// An empty slot: no effect in any stage and excluded from retirement.
    pub fn empty() -> Self {
        Self {
            bubble: true,
            ..Self::default()
        }
    }
}

/// Entry in the Execute/Memory latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u8,
    /// Raw word, kept for trace output.
    pub inst: u8,
    /// True for a bubble slot.
    pub bubble: bool,
    /// Destination register address.
    pub rd: usize,
    /// ALU result (or sampled input port for IN).
    pub result: u8,
    /// Resolved data-memory address.
    pub mem_addr: u8,
    /// Resolved data-memory write value (also the OUT port value).
    pub store_data: u8,
    /// Residual control signals.
    pub ctrl: ControlSignals,
}

impl ExMemEntry {
    /// An empty slot: no effect in any stage and excluded from retirement.
    pub fn empty() -> Self {
        Self {
            bubble: true,
            ..Self::default()
        }
    }
}

/// Entry in the Memory/Writeback latch.
///
/// The value this entry will write back is needed twice: by the Writeback
/// stage itself and by the Writeback forwarding path in Execute.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u8,
    /// Raw word, kept for trace output.
    pub inst: u8,
    /// True for a bubble slot.
    pub bubble: bool,
    /// Destination register address.
    pub rd: usize,
    /// ALU result carried through the Memory stage.
    pub result: u8,
    /// Byte read from data memory (loads, POP, return pop).
    pub mem_data: u8,
    /// Residual control signals.
    pub ctrl: ControlSignals,
}

impl MemWbEntry {
    /// An empty slot: no effect in any stage and excluded from retirement.
    pub fn empty() -> Self {
        Self {
            bubble: true,
            ..Self::default()
        }
    }

    /// The value this entry writes to its destination register.
    #[inline]
    pub const fn writeback_value(&self) -> u8 {
        match self.ctrl.wb_sel {
            WbSel::Alu => self.result,
            WbSel::Mem => self.mem_data,
        }
    }
}
