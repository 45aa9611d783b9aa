//! Functional units shared by the pipeline stages.

/// Arithmetic logic unit.
pub mod alu;
/// Control sequencer and multi-word micro-state.
pub mod sequencer;
