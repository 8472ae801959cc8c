//! Error types for pagesim.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// An empty trace is not an error (every policy reports zero faults), and
/// neither is OPT looking past the end of the trace (the page is treated as
/// never referenced again).
#[derive(Debug, Error)]
pub enum Error {
    /// A trace entry lies outside `[0, max_pages)`.
    ///
    /// Rejected before it reaches the tables.
    #[error("reference {page} at position {position} is outside [0, {max_pages})")]
    OutOfRangeReference {
        position: usize,
        page: u32,
        max_pages: usize,
    },

    /// The configuration cannot describe a machine (e.g. zero frames).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while reading or writing a trace file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The body of a binary trace file does not match its stored CRC32.
    #[error("trace checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// A trace file or text trace could not be parsed.
    #[error("malformed trace: {0}")]
    MalformedTrace(String),
}
