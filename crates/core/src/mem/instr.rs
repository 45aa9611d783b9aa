//! Instruction memory.
//!
//! A 256-byte array, immutable after load, with asynchronous (same-cycle)
//! reads. Besides the PC-indexed fetch port it exposes the two fixed cells:
//! address 0 (reset vector) and address 1 (interrupt vector).

use crate::common::constants::{INT_VECTOR_ADDR, MEM_SIZE, RESET_VECTOR_ADDR};

/// Read-only 256-byte instruction store.
#[derive(Clone, Debug)]
pub struct InstructionMemory {
    bytes: [u8; MEM_SIZE],
}

impl Default for InstructionMemory {
    fn default() -> Self {
        Self::new([0; MEM_SIZE])
    }
}

impl InstructionMemory {
    /// Creates an instruction memory holding `image`.
    pub const fn new(image: [u8; MEM_SIZE]) -> Self {
        Self { bytes: image }
    }

    /// Fetches the word at `pc`. Combinational, same-cycle.
    #[inline]
    pub const fn fetch(&self, pc: u8) -> u8 {
        self.bytes[pc as usize]
    }

    /// The reset vector cell: the PC value loaded on reset.
    #[inline]
    pub const fn reset_vector(&self) -> u8 {
        self.bytes[RESET_VECTOR_ADDR]
    }

    /// The interrupt vector cell: the PC value loaded on interrupt entry.
    #[inline]
    pub const fn interrupt_vector(&self) -> u8 {
        self.bytes[INT_VECTOR_ADDR]
    }
}
