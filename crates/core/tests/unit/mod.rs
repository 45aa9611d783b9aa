//! Unit tests for the processor components.

pub mod config;
pub mod isa;
pub mod sim;
