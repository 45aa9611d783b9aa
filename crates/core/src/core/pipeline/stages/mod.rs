//! The five pipeline stage drivers.
//!
//! Each stage is a free function over the core that reads the latches as
//! they stood at the start of the tick and returns its outputs; the core
//! evaluates the stages back-to-front and commits every latch, register,
//! and memory update at the tick boundary, so all five stages observe one
//! consistent pre-tick state.

/// Instruction decode and control sequencing.
pub mod decode;
/// ALU execution and operand forwarding.
pub mod execute;
/// Instruction fetch and next-PC selection.
pub mod fetch;
/// Data-memory access and the return-pop redirect.
pub mod memory;
/// Register write-back and retirement.
pub mod writeback;
