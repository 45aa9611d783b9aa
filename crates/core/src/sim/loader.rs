//! Program-image loader.
//!
//! Parses the plain-text hex format into a 256-byte instruction image:
//! 1. **Bytes:** Whitespace-separated two-digit hex values, filled in
//!    ascending addresses from the current origin.
//! 2. **Origins:** An `@HH` token moves the fill address to `HH`.
//! 3. **Comments:** `#` or `//` to end of line; blank lines are skipped.
//!
//! Address 0 is the reset vector and address 1 the interrupt vector, so a
//! typical image starts with `@00`, the two vector bytes, then an origin
//! for the program body.

use std::path::Path;

use crate::common::LoadError;
use crate::common::constants::MEM_SIZE;

/// Parses an image from its text form.
///
/// Unfilled cells are zero (a NOP).
///
/// # Errors
///
/// Returns a [`LoadError`] naming the offending line when a token is not a
/// hex byte or origin marker, or when bytes run past address 0xFF.
pub fn parse_image(text: &str) -> Result<[u8; MEM_SIZE], LoadError> {
    let mut image = [0u8; MEM_SIZE];
    let mut addr: usize = 0;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let code = raw_line
            .split('#')
            .next()
            .unwrap_or("")
            .split("//")
            .next()
            .unwrap_or("");

        for token in code.split_whitespace() {
            if let Some(origin) = token.strip_prefix('@') {
                addr = parse_origin(origin, line, token)?;
            } else {
                let byte = u8::from_str_radix(token, 16).map_err(|_| LoadError::InvalidByte {
                    line,
                    text: token.to_owned(),
                })?;
                if addr >= MEM_SIZE {
                    return Err(LoadError::ImageOverflow { line });
                }
                image[addr] = byte;
                addr += 1;
            }
        }
    }
    Ok(image)
}

/// Reads and parses an image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any
/// [`parse_image`] error for its contents.
pub fn load_image_file(path: impl AsRef<Path>) -> Result<[u8; MEM_SIZE], LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse_image(&text)
}

fn parse_origin(origin: &str, line: usize, token: &str) -> Result<usize, LoadError> {
    let invalid = || LoadError::InvalidOrigin {
        line,
        text: token.to_owned(),
    };
    if origin.is_empty() || origin.len() > 2 {
        return Err(invalid());
    }
    usize::from_str_radix(origin, 16).map_err(|_| invalid())
}
