//! Error taxonomy for the engine.
//!
//! Errors are surfaced synchronously to the caller; the engine performs no
//! logging, retries, or recovery of its own.

use core::fmt;

/// Error raised by the engine's fallible entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtError {
    /// An operation addresses positions outside the document it was applied
    /// to. The caller must resynchronize its document snapshot or discard
    /// the offending operation.
    InvalidOperation {
        /// Character offset the operation starts at.
        position: usize,
        /// Number of characters the operation covers.
        span: usize,
        /// Character length of the document it was applied to.
        text_len: usize,
    },
    /// A pair of operation kinds with no transform rule. The current kind
    /// set is closed and exhaustively covered, so the engine never
    /// constructs this; it is reserved for integration layers that extend
    /// the kind set.
    UnsupportedTransformPair {
        /// Kind of the left-hand operation.
        left: &'static str,
        /// Kind of the right-hand operation.
        right: &'static str,
    },
}

impl fmt::Display for OtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperation {
                position,
                span,
                text_len,
            } => write!(
                f,
                "invalid operation: spans {position}..{} but text length is {text_len}",
                position + span
            ),
            Self::UnsupportedTransformPair { left, right } => {
                write!(f, "no transform rule for operation pair {left}/{right}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OtError {}
