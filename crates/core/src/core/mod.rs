//! Core processor implementation.
//!
//! This module contains the main processor implementation including the
//! five-stage pipeline, the functional units, the architectural registers,
//! and the orchestrator that coordinates them tick by tick.

/// Architectural registers (general-purpose file, condition codes).
pub mod arch;

/// Processor state container and tick orchestration.
pub mod cpu;

/// Pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Functional units (ALU, control sequencer).
pub mod units;

pub use self::cpu::Cpu;
