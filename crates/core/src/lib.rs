//! 8-bit pipelined processor core library.
//!
//! This crate implements a cycle-accurate simulator for an 8-bit five-stage
//! pipelined processor with the following:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback), the
//!    4-register file with R3 as stack pointer, and the condition-code
//!    register with its interrupt shadow.
//! 2. **Memory:** Separate 256-byte instruction and data memories, with the
//!    reset and interrupt vectors in instruction cells 0 and 1.
//! 3. **ISA:** The 16-opcode 8-bit instruction word, including two-word
//!    loads/stores and the stacked CALL/RET/RTI flow group.
//! 4. **Hazards:** Full operand forwarding, the single load-use stall, and
//!    decode-resolved control flow.
//! 5. **Simulation:** Hex-image loader, configuration, and statistics
//!    collection.

/// Common types and constants (memory geometry, vectors, errors).
pub mod common;
/// Simulator configuration.
pub mod config;
/// Processor core (pipeline, arch, units, execution).
pub mod core;
/// Instruction set (fields, opcodes, sub-selectors, disassembly).
pub mod isa;
/// The two 256-byte memories.
pub mod mem;
/// Program loader and top-level simulator.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main processor type; holds registers, memories, latches, and stats.
pub use crate::core::Cpu;
/// Top-level driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
