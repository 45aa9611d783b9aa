//! The five-stage pipeline: latches, control signals, hazard logic, and
//! the per-stage drivers.

/// Hazard detection and operand forwarding.
pub mod hazards;
/// Inter-stage latch entry types.
pub mod latches;
/// Control signals and multiplexer selects.
pub mod signals;
/// The stage drivers.
pub mod stages;
