//! Architectural register state.
//!
//! 1. **Register file:** Four 8-bit general-purpose registers, R3 doubling
//!    as the stack pointer, with a dual-target write port.
//! 2. **Condition codes:** Z/N/C/V flags with an interrupt shadow copy.

/// Condition-code register (Z/N/C/V plus interrupt shadow).
pub mod ccr;

/// General-purpose register file.
pub mod gpr;

pub use ccr::{Ccr, Flags};
pub use gpr::{RegisterFile, WriteMode};
