//! Data memory.
//!
//! A 256-byte array with an asynchronous read port and a clock-synchronous
//! write port. At most one write is staged per tick and committed at the
//! tick boundary, after every read of that tick — so a read and a write to
//! the same address in one cycle see the old value win, and the new value
//! becomes visible the following cycle.

use crate::common::constants::MEM_SIZE;

/// Read/write 256-byte data store with a staged write port.
#[derive(Clone, Debug)]
pub struct DataMemory {
    bytes: [u8; MEM_SIZE],
    staged: Option<(u8, u8)>,
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new([0; MEM_SIZE])
    }
}

impl DataMemory {
    /// Creates a data memory holding `image` (test fixtures may preload it).
    pub const fn new(image: [u8; MEM_SIZE]) -> Self {
        Self {
            bytes: image,
            staged: None,
        }
    }

    /// Reads the byte at `addr` from the committed state. Combinational.
    #[inline]
    pub const fn read(&self, addr: u8) -> u8 {
        self.bytes[addr as usize]
    }

    /// Stages the single write of this tick.
    pub const fn stage_write(&mut self, addr: u8, val: u8) {
        self.staged = Some((addr, val));
    }

    /// Commits the staged write, if any, at the tick boundary.
    pub const fn commit(&mut self) {
        if let Some((addr, val)) = self.staged.take() {
            self.bytes[addr as usize] = val;
        }
    }

    /// Overwrites one byte directly.
    ///
    /// Harness/test escape hatch for preloading fixtures; the pipeline
    /// writes through [`DataMemory::stage_write`].
    pub const fn set(&mut self, addr: u8, val: u8) {
        self.bytes[addr as usize] = val;
    }
}
