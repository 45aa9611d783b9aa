//! Simulation driver: program loading and the top-level run loop.

/// Program-image parsing and file loading.
pub mod loader;

/// The top-level simulator.
pub mod simulator;

pub use loader::{load_image_file, parse_image};
pub use simulator::Simulator;
