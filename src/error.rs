//! Error types for queue operations.

use thiserror::Error;

/// Errors reported by [`PlayQueue`](crate::PlayQueue) operations.
///
/// Every fallible operation validates its arguments before touching any
/// link, so an `Err` always means the queue was left unchanged.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// A positional argument was outside `[0, len)`.
    #[error("index {index} out of range for queue of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// The currently playing track cannot be relocated.
    #[error("cannot move the currently playing track")]
    CurrentTrackPinned,
}

/// Convenience Result type using segue's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
