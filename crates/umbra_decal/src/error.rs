//! Error types for the decal renderer

use thiserror::Error;

/// Decal rendering errors
///
/// Everything here is a programming-contract violation. Expected
/// conditions (dark ground, routing miss, invisible blocks) never show up
/// as errors; they are ordinary return values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShadowError {
    /// Shadow radius must be finite and positive
    #[error("invalid shadow radius: {0}")]
    InvalidRadius(f32),

    /// The staging stack could not fit the quad
    #[error("staging stack exhausted: needed {needed} bytes, {free} free")]
    StagingExhausted { needed: usize, free: usize },

    /// The sink rejected the packed write
    #[error(transparent)]
    Sink(#[from] umbra_vertex::SinkError),
}

/// Result type for decal operations
pub type Result<T> = core::result::Result<T, ShadowError>;
