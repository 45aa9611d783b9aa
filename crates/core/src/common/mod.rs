//! Common types and constants shared across the core.
//!
//! This module groups the pieces every other module leans on:
//! 1. **Constants:** Memory geometry, vector cells, and the register reset pattern.
//! 2. **Errors:** The loader and configuration error types.

/// Architectural constants (memory sizes, vectors, field widths).
pub mod constants;

/// Error types for the loader and configuration surfaces.
pub mod error;

pub use error::{ConfigError, LoadError};
