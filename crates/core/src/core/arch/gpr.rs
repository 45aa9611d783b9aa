//! General-Purpose Register File.
//!
//! This module implements the 4-entry register file. It performs the following:
//! 1. **Storage:** Maintains four 8-bit registers R0-R3; R3 doubles as the
//!    stack pointer.
//! 2. **Dual-target write port:** One write per tick may update the normal
//!    destination, the stack pointer, or both simultaneously.
//! 3. **Deterministic reset:** Reset forces the fixed pattern in
//!    [`RESET_REGISTERS`], not all-zero.
//!
//! Reads are combinational against the committed state; the owning core
//! issues the single `write` of a tick only after every stage has read,
//! which gives the write-after-read ordering the pipeline relies on.

use crate::common::constants::{NUM_REGS, RESET_REGISTERS, SP};

/// Selects which targets the register file's write port updates this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// No write this tick.
    #[default]
    None,
    /// `regs[dest] <- data`.
    Normal,
    /// `regs[SP] <- sp_data`.
    Sp,
    /// Both targets in the same tick: `regs[dest] <- data` and `regs[SP] <- sp_data`.
    Both,
}

/// Four 8-bit registers with two read ports and a dual-target write port.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u8; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file holding the reset pattern.
    pub const fn new() -> Self {
        Self {
            regs: RESET_REGISTERS,
        }
    }

    /// Forces the fixed reset pattern into all four registers.
    pub const fn reset(&mut self) {
        self.regs = RESET_REGISTERS;
    }

    /// Reads one register. Combinational, same-cycle.
    #[inline]
    pub const fn read(&self, idx: usize) -> u8 {
        self.regs[idx & 0b11]
    }

    /// Reads both read ports at once.
    #[inline]
    pub const fn read2(&self, idx1: usize, idx2: usize) -> (u8, u8) {
        (self.read(idx1), self.read(idx2))
    }

    /// Reads the stack pointer (R3).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Applies the single write of this tick.
    ///
    /// In [`WriteMode::Both`] the SP target is written first, so a normal
    /// write to R3 wins over a simultaneous stack-pointer update.
    pub const fn write(&mut self, mode: WriteMode, dest: usize, data: u8, sp_data: u8) {
        match mode {
            WriteMode::None => {}
            WriteMode::Normal => self.regs[dest & 0b11] = data,
            WriteMode::Sp => self.regs[SP] = sp_data,
            WriteMode::Both => {
                self.regs[SP] = sp_data;
                self.regs[dest & 0b11] = data;
            }
        }
    }

    /// Overwrites one register directly.
    ///
    /// Harness/test escape hatch for preloading state; the pipeline itself
    /// only writes through [`RegisterFile::write`].
    pub const fn set(&mut self, idx: usize, val: u8) {
        self.regs[idx & 0b11] = val;
    }

    /// Returns a snapshot of all four registers.
    pub const fn snapshot(&self) -> [u8; NUM_REGS] {
        self.regs
    }
}
