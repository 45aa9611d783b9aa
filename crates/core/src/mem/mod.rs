//! The two independent 256-byte memories.
//!
//! 1. **Instruction memory:** Read-only after load, asynchronous read, with
//!    the two always-visible vector cells (reset, interrupt).
//! 2. **Data memory:** Asynchronous read, clock-synchronous write staged
//!    during the tick and committed at the boundary.

/// Data memory (read/write).
pub mod data;

/// Instruction memory (read-only after load).
pub mod instr;

pub use data::DataMemory;
pub use instr::InstructionMemory;
