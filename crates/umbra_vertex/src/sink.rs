//! Vertex sink traits and the fast-path capability adapter
//!
//! Sinks of unknown concrete capability implement `VertexSink`. Sinks
//! that can take bulk packed writes additionally expose a
//! `VertexBufferWriter` through `buffer_writer()`. Callers route through
//! `as_buffer_writer`; a `None` result is a normal routing decision (take
//! the generic per-vertex path), not an error, and is logged at most once
//! per sink kind.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use parking_lot::Mutex;

use crate::error::{Result, SinkError};
use crate::format::{ModelVertex, VertexFormat};

/// Bulk writer for packed vertex data
pub trait VertexBufferWriter {
    /// Submit `count` packed vertices in one call.
    ///
    /// `vertices` must be exactly `count * format.stride` bytes laid out
    /// per the format contract. Implementations reject a format they were
    /// not built for with `SinkError::FormatMismatch`.
    fn push(&mut self, vertices: &[u8], count: usize, format: VertexFormat) -> Result<()>;
}

/// An abstract vertex output sink of unknown concrete capability
pub trait VertexSink {
    /// The fast-path writer, if this sink supports bulk packed writes
    fn buffer_writer(&mut self) -> Option<&mut dyn VertexBufferWriter> {
        None
    }

    /// Stable name for this sink kind, used to rate-limit diagnostics
    fn kind(&self) -> &'static str;
}

/// Sink kinds already reported as lacking the fast path
static LOGGED_KINDS: Mutex<BTreeSet<&'static str>> = Mutex::new(BTreeSet::new());

/// Resolve the fast-path writer for a sink.
///
/// Returns `None` when the sink only supports the generic per-vertex
/// path; the first miss per sink kind is logged, later misses are silent.
pub fn as_buffer_writer<'a>(
    sink: &'a mut dyn VertexSink,
) -> Option<&'a mut dyn VertexBufferWriter> {
    let kind = sink.kind();

    if let Some(writer) = sink.buffer_writer() {
        return Some(writer);
    }

    if LOGGED_KINDS.lock().insert(kind) {
        log::warn!(
            "Vertex sink '{}' does not support packed writes; falling back to the generic path",
            kind
        );
    }

    None
}

/// A CPU-side vertex buffer that accepts bulk packed writes
///
/// Accumulates `ModelVertex` records in heap memory; the host uploads the
/// bytes to the GPU at the end of the pass.
#[derive(Debug, Default)]
pub struct BufferedSink {
    bytes: Vec<u8>,
    vertex_count: usize,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices written so far
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The packed vertex bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Drop all buffered vertices
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.vertex_count = 0;
    }
}

impl VertexBufferWriter for BufferedSink {
    fn push(&mut self, vertices: &[u8], count: usize, format: VertexFormat) -> Result<()> {
        if format != ModelVertex::FORMAT {
            return Err(SinkError::FormatMismatch {
                expected: ModelVertex::FORMAT,
                found: format,
            });
        }
        if vertices.len() != count * format.stride {
            return Err(SinkError::LengthMismatch {
                len: vertices.len(),
                count,
                stride: format.stride,
            });
        }

        self.bytes.extend_from_slice(vertices);
        self.vertex_count += count;
        Ok(())
    }
}

impl VertexSink for BufferedSink {
    fn buffer_writer(&mut self) -> Option<&mut dyn VertexBufferWriter> {
        Some(self)
    }

    fn kind(&self) -> &'static str {
        "buffered"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GenericOnlySink;

    impl VertexSink for GenericOnlySink {
        fn kind(&self) -> &'static str {
            "generic-only"
        }
    }

    #[test]
    fn test_adapter_routes_capable_sink() {
        let mut sink = BufferedSink::new();
        assert!(as_buffer_writer(&mut sink).is_some());
    }

    #[test]
    fn test_adapter_misses_generic_sink() {
        let mut sink = GenericOnlySink;
        assert!(as_buffer_writer(&mut sink).is_none());
        // A second miss takes the already-logged path and still routes.
        assert!(as_buffer_writer(&mut sink).is_none());
    }

    #[test]
    fn test_push_rejects_wrong_format() {
        let mut sink = BufferedSink::new();
        let bogus = VertexFormat { name: "bogus", stride: 12 };
        let bytes = [0u8; 48];
        let err = sink.push(&bytes, 4, bogus).unwrap_err();
        assert!(matches!(err, SinkError::FormatMismatch { .. }));
        assert_eq!(sink.vertex_count(), 0);
    }

    #[test]
    fn test_push_rejects_short_payload() {
        let mut sink = BufferedSink::new();
        let bytes = [0u8; ModelVertex::STRIDE * 3];
        let err = sink.push(&bytes, 4, ModelVertex::FORMAT).unwrap_err();
        assert!(matches!(err, SinkError::LengthMismatch { .. }));
    }

    #[test]
    fn test_push_accumulates() {
        let mut sink = BufferedSink::new();
        let bytes = [0u8; ModelVertex::STRIDE * 4];
        sink.push(&bytes, 4, ModelVertex::FORMAT).unwrap();
        sink.push(&bytes, 4, ModelVertex::FORMAT).unwrap();
        assert_eq!(sink.vertex_count(), 8);
        assert_eq!(sink.bytes().len(), ModelVertex::STRIDE * 8);
    }
}
