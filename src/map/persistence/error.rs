//! Error types for the map file formats.

use thiserror::Error;

/// Failures while reading or writing `.map` / `.cmp` data.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("CMAP header missing, cannot parse cmp data (found {found:?})")]
    BadHeader { found: Vec<u8> },

    #[error("map data truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: u64, actual: u64 },

    #[error("map size {width}x{height} exceeds the 65535 per side limit of the file format")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
