//! Error types.

use thiserror::Error;

/// Errors raised while assembling a stream.
///
/// Running a stream never produces these: an exhausted split budget or a
/// declined split is reported as `None`, not as an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// No start supplier was provided.
    #[error("evolution stream requires a start supplier")]
    MissingStart,

    /// No evolution function was provided.
    #[error("evolution stream requires an evolution function")]
    MissingEvolution,
}
