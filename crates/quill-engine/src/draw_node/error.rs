//! Error types for draw node mutation.

use thiserror::Error;

/// Result type for draw node operations.
pub type Result<T> = std::result::Result<T, DrawNodeError>;

/// Errors returned by index-addressed operations on a draw node.
///
/// Geometry builders never fail; degenerate inputs are logged and ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawNodeError {
    /// The handle does not address a complete segment run in the current buffer.
    ///
    /// Handles shift when an earlier run is removed; this usually means a stale handle.
    #[error("segment handle {handle} is out of range for a buffer of {len} vertices")]
    InvalidHandle { handle: usize, len: usize },

    /// A vertex range extends past the end of the buffer.
    #[error("vertex range {start}+{count} is out of bounds for a buffer of {len} vertices")]
    RangeOutOfBounds { start: usize, count: usize, len: usize },
}
