//! Loader and configuration errors.
//!
//! The core itself has no recoverable runtime errors: undefined opcodes
//! decode to a no-op and every address is range-limited by its integer
//! width. The fallible surfaces are parsing a program image and parsing a
//! configuration, and those are what this module covers.

use thiserror::Error;

/// Errors produced while parsing or loading a byte-per-line hex image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A line that is neither a byte, an origin marker, a comment, nor blank.
    #[error("line {line}: expected a hex byte (00-FF), found `{text}`")]
    InvalidByte {
        /// 1-based line number in the image text.
        line: usize,
        /// The offending token.
        text: String,
    },

    /// An `@HH` origin marker whose address part does not parse or exceeds 0xFF.
    #[error("line {line}: invalid origin marker `{text}`")]
    InvalidOrigin {
        /// 1-based line number in the image text.
        line: usize,
        /// The offending token.
        text: String,
    },

    /// More bytes than remaining image cells from the current origin.
    #[error("line {line}: image overflows past address 0xFF")]
    ImageOverflow {
        /// 1-based line number of the byte that did not fit.
        line: usize,
    },

    /// The image file could not be read.
    #[error("failed to read image file")]
    Io(#[from] std::io::Error),
}

/// Errors produced while loading a JSON configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration")]
    Parse(#[from] serde_json::Error),
}
