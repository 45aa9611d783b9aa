//! Shared test infrastructure for pipeline-level tests.

/// Per-mnemonic instruction encoders.
pub mod asm;
