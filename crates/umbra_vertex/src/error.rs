//! Error types for the sink boundary

use thiserror::Error;

use crate::format::VertexFormat;

/// Sink boundary errors
///
/// These signal a mismatched integration (a programming-contract
/// violation), not a runtime data condition, and must propagate to the
/// caller rather than be swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// Writer and payload disagree on the vertex format
    #[error("vertex format mismatch: sink expects {expected:?}, got {found:?}")]
    FormatMismatch {
        expected: VertexFormat,
        found: VertexFormat,
    },

    /// Payload length is not `count * stride`
    #[error("vertex payload is {len} bytes, expected {count} x {stride}")]
    LengthMismatch {
        len: usize,
        count: usize,
        stride: usize,
    },
}

/// Result type for sink operations
pub type Result<T> = core::result::Result<T, SinkError>;
