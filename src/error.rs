//! Errors raised when a caller hands the formatter input it cannot accept.

use thiserror::Error;

/// Contract violations detected before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A numeric operation code outside `-1`, `0`, `1`.
    #[error("unknown diff operation kind: {0}")]
    UnknownOpKind(i8),
    /// A context window can not be negative.
    #[error("context lines must be non-negative, got {0}")]
    NegativeContextLines(i64),
}
